//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of concurrent downloads per batch chunk.
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Default per-image size estimate in megabytes. A placeholder
/// heuristic, not a measurement; overridable via configuration.
pub const DEFAULT_ESTIMATED_IMAGE_SIZE_MB: u64 = 2;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,

    #[serde(default)]
    pub download: DownloadOptions,
}

/// Backend file service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API, e.g. `https://api.example.com/v1`.
    pub base_url: String,

    /// Bearer token sent with signed URL requests.
    #[serde(default)]
    pub auth_token: Option<String>,
}

/// Tunables for download orchestration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadOptions {
    /// Concurrent downloads per batch chunk.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Per-image size estimate used for statistics.
    #[serde(default = "default_estimated_image_size_mb")]
    pub estimated_image_size_mb: u64,

    /// Whether the progress counter advances for failed downloads.
    ///
    /// `true` (the default) counts attempts processed, so progress
    /// always ends at the total. `false` counts successes only, so a
    /// traversal with failures ends below the total.
    #[serde(default = "default_true")]
    pub count_failed_in_progress: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            estimated_image_size_mb: DEFAULT_ESTIMATED_IMAGE_SIZE_MB,
            count_failed_in_progress: true,
        }
    }
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_estimated_image_size_mb() -> u64 {
    DEFAULT_ESTIMATED_IMAGE_SIZE_MB
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
