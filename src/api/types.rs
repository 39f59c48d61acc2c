//! Backend response type definitions.

use serde::Deserialize;

/// Generic backend response wrapper.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub response: T,
}

/// Signed URL issuance response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlResponse {
    pub url: String,

    /// Expiration echo from the backend, when provided.
    #[serde(default)]
    pub expires_in_hours: Option<u32>,
}
