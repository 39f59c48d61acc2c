//! Byte transfer capability.
//!
//! The orchestration layer never moves bytes itself; when a caller wants
//! the actual image data pulled, a [`ByteTransfer`] implementation is
//! injected and invoked with the signed URL. [`HttpTransfer`] is the
//! plain HTTP implementation; platform targets supply their own.

pub mod http;

pub use http::HttpTransfer;

use async_trait::async_trait;

use crate::error::Result;

/// Fetches the bytes behind a (signed) URL.
///
/// No timeouts or retries exist above this trait: an implementation that
/// can hang will stall the operation that invoked it, so implementations
/// are expected to bound their own request time.
#[async_trait]
pub trait ByteTransfer: Send + Sync {
    /// Fetch the full contents at `url` into memory.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
