//! Storyboard Downloader - media download orchestration for storyboard
//! production tools.
//!
//! This library walks the project → storyboard → scene → frame content
//! hierarchy, resolves time-limited signed URLs for frame images, and
//! orchestrates their download without holding any state of its own.
//!
//! # Features
//!
//! - Flatten the content tree at project/storyboard/scene/frame level
//! - Single frame downloads with uniform, non-throwing results
//! - Batch downloads under a bounded concurrency budget
//! - Cold progress streams for scene and storyboard downloads
//! - Self-contained, time-boxed offline manifests
//! - Size and format statistics over any subtree
//!
//! Repositories, the signed URL backend, and the byte transfer step are
//! injected traits; [`BackendClient`] and [`HttpTransfer`] cover the
//! plain HTTP cases.
//!
//! # Example
//!
//! ```no_run
//! use storyboard_downloader::{ContentLevel, DownloadService, Result};
//!
//! async fn sync_storyboard(
//!     service: &DownloadService,
//!     project_id: &str,
//!     storyboard_id: &str,
//! ) -> Result<()> {
//!     let manifest = service
//!         .create_manifest(project_id, storyboard_id, "acme")
//!         .await?;
//!     println!("{} images, valid until {}", manifest.total_images, manifest.expires_at);
//!
//!     let refs = service
//!         .collect_downloadable_refs(ContentLevel::Storyboard, storyboard_id)
//!         .await?;
//!     let frame_ids: Vec<String> = refs.into_iter().map(|r| r.frame_id).collect();
//!
//!     let results = service.download_batch(project_id, &frame_ids, "acme").await;
//!     println!(
//!         "{} of {} downloaded",
//!         results.iter().filter(|r| r.success).count(),
//!         results.len()
//!     );
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod download;
pub mod error;
pub mod model;
pub mod repository;
pub mod transfer;

// Re-exports for convenience
pub use api::{BackendClient, FileService, DEFAULT_EXPIRATION_HOURS};
pub use config::{Config, DownloadOptions};
pub use download::DownloadService;
pub use error::{Error, Result};
pub use model::{
    ContentLevel, DownloadManifest, DownloadProgress, DownloadResult, DownloadStatistics, Frame,
    FrameImageRef, ImageEntry, Scene, ShotType, Storyboard, MANIFEST_TTL_HOURS,
};
pub use repository::{ContentRepository, FrameRepository};
pub use transfer::{ByteTransfer, HttpTransfer};
