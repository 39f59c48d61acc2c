//! Signed URL resolution.
//!
//! Downloads never use raw storage URLs; every transfer goes through a
//! time-limited signed URL issued by the backend file service. The
//! [`FileService`] trait is that contract; [`BackendClient`] implements
//! it over HTTP.

pub mod client;
pub mod types;

pub use client::BackendClient;

use async_trait::async_trait;

use crate::error::Result;

/// Default signed URL expiration, in hours.
pub const DEFAULT_EXPIRATION_HOURS: u32 = 4;

/// Issues time-limited, pre-authorized download URLs.
#[async_trait]
pub trait FileService: Send + Sync {
    /// Resolve a signed download URL for one stored asset.
    ///
    /// The returned URL is valid for `expiration_hours` and is not
    /// revocable from this side.
    async fn signed_download_url(
        &self,
        customer_alias: &str,
        project_id: &str,
        asset_type: &str,
        version: &str,
        filename: &str,
        expiration_hours: u32,
    ) -> Result<String>;
}
