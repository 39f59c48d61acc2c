//! Configuration validation logic.

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Upper bound on per-chunk concurrency; beyond this the backend rate
/// limiter starts rejecting signed URL requests.
const MAX_CONCURRENCY: usize = 32;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url(&config.backend.base_url)?;
    validate_concurrency(config.download.concurrency)?;
    validate_size_estimate(config.download.estimated_image_size_mb)?;

    Ok(())
}

/// Validate the backend base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(Error::MissingConfig("backend.base_url".to_string()));
    }

    let url = Url::parse(base_url).map_err(|e| Error::ConfigValidation {
        field: "backend.base_url".to_string(),
        message: format!("Not a valid URL: {}", e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "backend.base_url".to_string(),
            message: format!("Unsupported URL scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

/// Validate the batch concurrency bound.
pub fn validate_concurrency(concurrency: usize) -> Result<()> {
    if concurrency == 0 {
        return Err(Error::ConfigValidation {
            field: "download.concurrency".to_string(),
            message: "Concurrency must be at least 1".to_string(),
        });
    }

    if concurrency > MAX_CONCURRENCY {
        return Err(Error::ConfigValidation {
            field: "download.concurrency".to_string(),
            message: format!(
                "Concurrency must be at most {} (got {})",
                MAX_CONCURRENCY, concurrency
            ),
        });
    }

    Ok(())
}

/// Validate the per-image size estimate.
pub fn validate_size_estimate(estimated_mb: u64) -> Result<()> {
    if estimated_mb == 0 {
        return Err(Error::ConfigValidation {
            field: "download.estimated_image_size_mb".to_string(),
            message: "Size estimate must be at least 1 MB".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_base_url() {
        assert!(validate_base_url("https://api.example.com/v1").is_ok());
        assert!(validate_base_url("http://localhost:8080").is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(validate_base_url("").is_err());
        assert!(validate_base_url("not a url").is_err());
        assert!(validate_base_url("ftp://files.example.com").is_err());
    }

    #[test]
    fn test_concurrency_bounds() {
        assert!(validate_concurrency(1).is_ok());
        assert!(validate_concurrency(32).is_ok());
        assert!(validate_concurrency(0).is_err());
        assert!(validate_concurrency(33).is_err());
    }

    #[test]
    fn test_size_estimate() {
        assert!(validate_size_estimate(2).is_ok());
        assert!(validate_size_estimate(0).is_err());
    }
}
