//! Domain model for the content hierarchy and download artifacts.

pub mod content;
pub mod download;
pub mod manifest;

pub use content::{ContentLevel, Frame, Scene, ShotType, Storyboard};
pub use download::{DownloadProgress, DownloadResult, DownloadStatistics, FrameImageRef};
pub use manifest::{DownloadManifest, ImageEntry, MANIFEST_TTL_HOURS};
