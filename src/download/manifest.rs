//! Offline manifest assembly.

use std::collections::HashMap;

use chrono::Utc;

use crate::api::DEFAULT_EXPIRATION_HOURS;
use crate::download::{filename_from_url, DownloadService, ASSET_TYPE_IMAGES, ASSET_VERSION};
use crate::error::{Error, Result};
use crate::model::{DownloadManifest, ImageEntry};

impl DownloadService {
    /// Build a complete, time-boxed manifest for a storyboard.
    ///
    /// Every frame with an image gets a signed URL valid for the
    /// manifest's full lifetime; entries are ordered by scene order,
    /// then frame order. A manifest with holes is not a valid artifact,
    /// so a missing storyboard or any single resolution failure fails
    /// the whole call and nothing partial is returned.
    pub async fn create_manifest(
        &self,
        project_id: &str,
        storyboard_id: &str,
        customer_alias: &str,
    ) -> Result<DownloadManifest> {
        let storyboard = self
            .content
            .get_storyboard(storyboard_id)
            .await?
            .ok_or_else(|| Error::StoryboardNotFound(storyboard_id.to_string()))?;

        let mut images = Vec::new();

        for scene in &storyboard.scenes {
            for frame in &scene.frames {
                let Some(image_url) = frame.image_url.as_deref().filter(|url| !url.is_empty())
                else {
                    continue;
                };

                let download_url = self
                    .files
                    .signed_download_url(
                        customer_alias,
                        project_id,
                        ASSET_TYPE_IMAGES,
                        ASSET_VERSION,
                        filename_from_url(image_url),
                        DEFAULT_EXPIRATION_HOURS,
                    )
                    .await?;

                let mut metadata = HashMap::new();
                metadata.insert("shotType".to_string(), frame.shot_type.as_str().to_string());
                metadata.insert("duration".to_string(), frame.duration.to_string());
                metadata.insert("frameNumber".to_string(), frame.frame_number.to_string());

                images.push(ImageEntry {
                    frame_id: frame.id.clone(),
                    scene_id: scene.id.clone(),
                    original_url: image_url.to_string(),
                    download_url,
                    filename: ImageEntry::filename_for(&scene.id, frame.frame_number, &frame.id),
                    metadata,
                });
            }
        }

        let created_at = Utc::now();

        tracing::info!(
            "Built manifest for storyboard {}: {} images",
            storyboard_id,
            images.len()
        );

        Ok(DownloadManifest {
            project_id: project_id.to_string(),
            storyboard_id: storyboard_id.to_string(),
            storyboard_title: storyboard.title.clone(),
            total_images: images.len(),
            created_at,
            expires_at: created_at + DownloadManifest::ttl(),
            images,
        })
    }
}
