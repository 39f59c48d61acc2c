//! Download orchestration over the content hierarchy.
//!
//! This module provides:
//! - Flattening the project/storyboard/scene/frame tree into image refs
//! - Single frame image downloads with uniform results
//! - Chunked concurrent batch downloads
//! - Progress-reporting scene/storyboard downloads
//! - Offline manifest assembly
//! - Size/format statistics

pub mod batch;
pub mod collect;
pub mod manifest;
pub mod progress;
pub mod service;
pub mod stats;

#[cfg(test)]
pub(crate) mod testutil;

pub use service::DownloadService;

/// Asset type under which frame images are stored on the backend.
pub(crate) const ASSET_TYPE_IMAGES: &str = "images";

/// Asset layout version.
pub(crate) const ASSET_VERSION: &str = "v1";

/// Final path segment of a URL; the stored asset filename.
pub(crate) fn filename_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://cdn.example.com/images/shot.jpg"),
            "shot.jpg"
        );
        assert_eq!(filename_from_url("shot.jpg"), "shot.jpg");
    }
}
