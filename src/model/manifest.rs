//! Download manifest: a time-boxed snapshot of signed URLs for offline use.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How long manifest URLs stay valid, in hours. Matches the expiration
/// requested from the signed URL backend.
pub const MANIFEST_TTL_HOURS: i64 = 4;

/// One downloadable image inside a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    pub frame_id: String,
    pub scene_id: String,

    /// Original (unsigned) image URL.
    pub original_url: String,

    /// Pre-authorized download URL, valid until the manifest expires.
    pub download_url: String,

    /// Deterministic target filename: `{sceneId}_{frameNumber}_{frameId}.jpg`.
    pub filename: String,

    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl ImageEntry {
    /// Build the deterministic filename for a frame image.
    pub fn filename_for(scene_id: &str, frame_number: u32, frame_id: &str) -> String {
        format!("{}_{}_{}.jpg", scene_id, frame_number, frame_id)
    }
}

/// Self-contained snapshot of every downloadable image in a storyboard.
///
/// The embedded URLs are only guaranteed valid until `expires_at`;
/// consumers must not use a manifest past that instant. Expiry is a
/// documented contract, not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadManifest {
    pub project_id: String,
    pub storyboard_id: String,
    pub storyboard_title: String,

    /// Always equal to `images.len()`.
    pub total_images: usize,

    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,

    /// Ordered by scene order, then frame order.
    pub images: Vec<ImageEntry>,
}

impl DownloadManifest {
    /// Fixed manifest lifetime.
    pub fn ttl() -> Duration {
        Duration::hours(MANIFEST_TTL_HOURS)
    }

    /// Whether the manifest's URLs have lapsed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Serialize to pretty JSON for writing alongside the images.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a manifest previously produced by [`Self::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
