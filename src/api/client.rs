//! Backend file service HTTP client.

use async_trait::async_trait;
use reqwest::{header, Client};
use url::Url;

use crate::api::types::{ApiResponse, SignedUrlResponse};
use crate::api::FileService;
use crate::error::{Error, Result};

/// Path of the signed URL issuance endpoint, relative to the base URL.
const SIGNED_URL_PATH: &str = "files/signed-download-url";

/// HTTP client for the backend file service.
pub struct BackendClient {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl BackendClient {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            auth_token: None,
        })
    }

    /// Attach a bearer token sent with every request.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Build the signed URL endpoint with all query parameters.
    fn signed_url_endpoint(
        &self,
        customer_alias: &str,
        project_id: &str,
        asset_type: &str,
        version: &str,
        filename: &str,
        expiration_hours: u32,
    ) -> Result<Url> {
        let mut url = self.base_url.join(SIGNED_URL_PATH)?;
        url.query_pairs_mut()
            .append_pair("customerAlias", customer_alias)
            .append_pair("projectId", project_id)
            .append_pair("assetType", asset_type)
            .append_pair("version", version)
            .append_pair("filename", filename)
            .append_pair("expirationHours", &expiration_hours.to_string());
        Ok(url)
    }
}

/// Ensure the base URL parses and ends with a slash so joins keep the path.
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };
    Ok(Url::parse(&normalized)?)
}

#[async_trait]
impl FileService for BackendClient {
    async fn signed_download_url(
        &self,
        customer_alias: &str,
        project_id: &str,
        asset_type: &str,
        version: &str,
        filename: &str,
        expiration_hours: u32,
    ) -> Result<String> {
        let url = self.signed_url_endpoint(
            customer_alias,
            project_id,
            asset_type,
            version,
            filename,
            expiration_hours,
        )?;

        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(token) = &self.auth_token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() {
                    "Not authorized for signed URL"
                } else {
                    &body
                }
            )));
        }

        if !status.is_success() {
            return Err(Error::UrlResolution(format!(
                "HTTP {} for {}",
                status, filename
            )));
        }

        let text = response.text().await?;
        let api_response: ApiResponse<SignedUrlResponse> =
            serde_json::from_str(&text).map_err(|e| {
                Error::UrlResolution(format!(
                    "Failed to parse signed URL response: {} - Response: {}",
                    e,
                    &text[..text.len().min(500)]
                ))
            })?;

        if !api_response.success {
            return Err(Error::UrlResolution(format!(
                "Backend refused to sign {}",
                filename
            )));
        }

        Ok(api_response.response.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_all_parameters() {
        let client = BackendClient::new("https://backend.example.com/api/v1").unwrap();
        let url = client
            .signed_url_endpoint("acme", "p1", "images", "v1", "shot.jpg", 4)
            .unwrap();

        assert!(url.path().ends_with("/files/signed-download-url"));
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(query.contains(&("customerAlias".to_string(), "acme".to_string())));
        assert!(query.contains(&("projectId".to_string(), "p1".to_string())));
        assert!(query.contains(&("assetType".to_string(), "images".to_string())));
        assert!(query.contains(&("version".to_string(), "v1".to_string())));
        assert!(query.contains(&("filename".to_string(), "shot.jpg".to_string())));
        assert!(query.contains(&("expirationHours".to_string(), "4".to_string())));
    }

    #[test]
    fn test_base_url_keeps_path_segment() {
        let client = BackendClient::new("https://backend.example.com/api/v1").unwrap();
        let url = client
            .signed_url_endpoint("acme", "p1", "images", "v1", "shot.jpg", 4)
            .unwrap();
        assert_eq!(url.path(), "/api/v1/files/signed-download-url");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(BackendClient::new("not a url").is_err());
    }
}
