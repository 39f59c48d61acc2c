//! HTTP byte transfer backed by reqwest.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::transfer::ByteTransfer;

/// Plain HTTP implementation of [`ByteTransfer`].
pub struct HttpTransfer {
    client: Client,
}

impl HttpTransfer {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Download(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Like [`Self::new`] but with a per-request timeout, so a hung
    /// server cannot stall the calling operation indefinitely.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Download(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Stream the contents at `url` directly to a file on disk.
    ///
    /// Used by hosts that persist images for offline use instead of
    /// holding them in memory.
    pub async fn fetch_to_file(&self, url: &str, output_path: &Path) -> Result<PathBuf> {
        let response = self.get_checked(url).await?;

        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = File::create(output_path).await?;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            file.write_all(&chunk).await?;
        }

        file.flush().await?;

        Ok(output_path.to_path_buf())
    }

    async fn get_checked(&self, url: &str) -> Result<reqwest::Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl ByteTransfer for HttpTransfer {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get_checked(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        Ok(bytes.to_vec())
    }
}
