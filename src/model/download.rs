//! Value objects produced by download operations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::content::Frame;

/// Reference to one downloadable frame image, flattened out of the
/// content hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameImageRef {
    pub frame_id: String,
    pub scene_id: String,

    /// Original (unsigned) image URL. `None` means the frame has no
    /// image yet; such refs are excluded from download paths.
    pub image_url: Option<String>,
}

impl FrameImageRef {
    /// Build a ref from a frame, normalizing empty URLs to `None`.
    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            frame_id: frame.id.clone(),
            scene_id: frame.scene_id.clone(),
            image_url: frame
                .image_url
                .clone()
                .filter(|url| !url.is_empty()),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

/// Result of a single frame image download.
///
/// `success` holds exactly when `error` is absent; construct through
/// [`DownloadResult::succeeded`] and [`DownloadResult::failed`] to keep
/// that pairing intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResult {
    pub frame_id: String,

    /// Original image URL of the frame (empty on failure).
    pub image_path: String,

    /// Resolved signed download URL, when resolution succeeded.
    pub local_path: Option<String>,

    pub success: bool,
    pub error: Option<String>,
}

impl DownloadResult {
    /// Successful download of a frame image.
    pub fn succeeded(frame_id: impl Into<String>, image_path: impl Into<String>, local_path: impl Into<String>) -> Self {
        Self {
            frame_id: frame_id.into(),
            image_path: image_path.into(),
            local_path: Some(local_path.into()),
            success: true,
            error: None,
        }
    }

    /// Failed download carrying the failure message.
    pub fn failed(frame_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            frame_id: frame_id.into(),
            image_path: String::new(),
            local_path: None,
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Progress snapshot emitted while a scene or storyboard downloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadProgress {
    pub total_images: usize,
    pub downloaded_images: usize,

    /// URL of the image currently being processed.
    pub current_image: Option<String>,

    /// Completed fraction in `[0, 1]`.
    pub progress: f32,
}

impl DownloadProgress {
    /// Snapshot for a traversal with `downloaded` of `total` images done.
    pub fn snapshot(total: usize, downloaded: usize, current_image: Option<String>) -> Self {
        Self {
            total_images: total,
            downloaded_images: downloaded,
            current_image,
            progress: downloaded as f32 / total as f32,
        }
    }

    /// Terminal snapshot for an empty download set: trivially complete.
    pub fn complete_empty() -> Self {
        Self {
            total_images: 0,
            downloaded_images: 0,
            current_image: None,
            progress: 1.0,
        }
    }
}

/// Lightweight size/format statistics over a content subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadStatistics {
    pub total_frames: usize,
    pub frames_with_images: usize,

    /// Heuristic estimate, not a measurement.
    pub estimated_size_mb: u64,

    /// Distinct lowercase file extensions seen across image URLs.
    pub image_formats: BTreeSet<String>,
}
