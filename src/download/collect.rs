//! Flattening the content tree into ordered frame image refs.

use crate::download::DownloadService;
use crate::error::{Error, Result};
use crate::model::{ContentLevel, FrameImageRef};

impl DownloadService {
    /// Flatten the subtree rooted at `id` into frame image refs, in
    /// storyboard, then scene, then frame declared order.
    ///
    /// For [`ContentLevel::Project`] `id` is the project ID. A missing
    /// storyboard or frame is an error; refs without an image URL are
    /// included (statistics consumers need the raw counts).
    pub async fn collect_frame_refs(
        &self,
        level: ContentLevel,
        id: &str,
    ) -> Result<Vec<FrameImageRef>> {
        let refs = match level {
            ContentLevel::Project => {
                let storyboards = self.content.get_storyboards(id).await?;
                storyboards
                    .iter()
                    .flat_map(|sb| &sb.scenes)
                    .flat_map(|scene| &scene.frames)
                    .map(FrameImageRef::from_frame)
                    .collect()
            }
            ContentLevel::Storyboard => {
                let storyboard = self
                    .content
                    .get_storyboard(id)
                    .await?
                    .ok_or_else(|| Error::StoryboardNotFound(id.to_string()))?;
                storyboard
                    .scenes
                    .iter()
                    .flat_map(|scene| &scene.frames)
                    .map(FrameImageRef::from_frame)
                    .collect()
            }
            ContentLevel::Scene => self
                .frames
                .get_frames_by_scene_id(id)
                .await?
                .iter()
                .map(FrameImageRef::from_frame)
                .collect(),
            ContentLevel::Frame => {
                let frame = self
                    .frames
                    .get_frame_by_id(id)
                    .await?
                    .ok_or_else(|| Error::FrameNotFound(id.to_string()))?;
                vec![FrameImageRef::from_frame(&frame)]
            }
        };

        tracing::debug!("Collected {} frame refs at {} level", refs.len(), level);

        Ok(refs)
    }

    /// Like [`Self::collect_frame_refs`], retaining only refs that
    /// carry an image URL. This is the set download paths operate on.
    pub async fn collect_downloadable_refs(
        &self,
        level: ContentLevel,
        id: &str,
    ) -> Result<Vec<FrameImageRef>> {
        let mut refs = self.collect_frame_refs(level, id).await?;
        refs.retain(FrameImageRef::has_image);
        Ok(refs)
    }
}
