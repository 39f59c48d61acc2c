//! Size and format statistics over a content subtree.

use crate::download::DownloadService;
use crate::error::Result;
use crate::model::{ContentLevel, DownloadStatistics};

impl DownloadService {
    /// Compute download statistics for the subtree at the given level.
    ///
    /// For [`ContentLevel::Project`] the project itself is the subtree,
    /// so `project_id` drives the lookup and `id` is ignored. Unlike
    /// the collector, an absent storyboard or frame yields zeroed
    /// statistics instead of an error. The size figure is the
    /// configured per-image estimate times the image count, not a
    /// measurement.
    pub async fn statistics(
        &self,
        project_id: &str,
        level: ContentLevel,
        id: &str,
    ) -> Result<DownloadStatistics> {
        let target = match level {
            ContentLevel::Project => project_id,
            _ => id,
        };

        let refs = match self.collect_frame_refs(level, target).await {
            Ok(refs) => refs,
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => return Err(e),
        };

        let frames_with_images = refs.iter().filter(|r| r.has_image()).count();
        let image_formats = refs
            .iter()
            .filter_map(|r| r.image_url.as_deref())
            .filter_map(image_format)
            .collect();

        Ok(DownloadStatistics {
            total_frames: refs.len(),
            frames_with_images,
            estimated_size_mb: frames_with_images as u64 * self.options.estimated_image_size_mb,
            image_formats,
        })
    }
}

/// Extract a lowercase file extension from an image URL.
///
/// The query string is stripped first; anything that does not look like
/// an extension (no dot, too long, non-alphanumeric) is discarded.
fn image_format(url: &str) -> Option<String> {
    let path = url.split('?').next()?;
    let filename = path.rsplit('/').next()?;

    if !filename.contains('.') {
        return None;
    }

    let ext = filename.rsplit('.').next()?;
    if !ext.is_empty() && ext.len() <= 10 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(ext.to_lowercase())
    } else {
        None
    }
}
