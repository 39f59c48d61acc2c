//! Configuration module.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Tunables for the download orchestration layer
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{BackendConfig, Config, DownloadOptions};
pub use validation::validate_config;
