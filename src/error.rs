//! Error types for the storyboard-downloader crate.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Content lookup errors
    #[error("Storyboard not found: {0}")]
    StoryboardNotFound(String),

    #[error("Frame not found: {0}")]
    FrameNotFound(String),

    #[error("Frame has no image URL: {0}")]
    MissingImage(String),

    // Backend errors
    #[error("Backend error: {0}")]
    Api(String),

    #[error("Signed URL resolution failed: {0}")]
    UrlResolution(String),

    // Transfer errors
    #[error("Download failed: {0}")]
    Download(String),

    // Repository errors
    #[error("Repository error: {0}")]
    Repository(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Whether this error means a requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::StoryboardNotFound(_) | Error::FrameNotFound(_))
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
