//! Download service wiring and single frame image downloads.

use std::sync::Arc;

use crate::api::{FileService, DEFAULT_EXPIRATION_HOURS};
use crate::config::DownloadOptions;
use crate::download::{filename_from_url, ASSET_TYPE_IMAGES, ASSET_VERSION};
use crate::error::Result;
use crate::model::DownloadResult;
use crate::repository::{ContentRepository, FrameRepository};
use crate::transfer::ByteTransfer;

/// Orchestrates frame image downloads over injected collaborators.
///
/// The service owns no persistent state; every operation is a pure
/// traversal over the repositories plus signed URL resolution.
pub struct DownloadService {
    pub(crate) frames: Arc<dyn FrameRepository>,
    pub(crate) content: Arc<dyn ContentRepository>,
    pub(crate) files: Arc<dyn FileService>,
    pub(crate) transfer: Option<Arc<dyn ByteTransfer>>,
    pub(crate) options: DownloadOptions,
}

impl DownloadService {
    /// Create a service with default options and no byte transfer.
    pub fn new(
        frames: Arc<dyn FrameRepository>,
        content: Arc<dyn ContentRepository>,
        files: Arc<dyn FileService>,
    ) -> Self {
        Self {
            frames,
            content,
            files,
            transfer: None,
            options: DownloadOptions::default(),
        }
    }

    /// Override the download options.
    pub fn with_options(mut self, options: DownloadOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach a byte transfer capability. When present, each successful
    /// URL resolution is followed by an actual byte fetch; a transfer
    /// fault fails that item like any other per-item error.
    pub fn with_transfer(mut self, transfer: Arc<dyn ByteTransfer>) -> Self {
        self.transfer = Some(transfer);
        self
    }

    /// Download one frame's image.
    ///
    /// Never fails past its own boundary: a missing frame, a frame
    /// without an image, or any collaborator fault all come back as a
    /// `DownloadResult` carrying the error message. On success
    /// `image_path` is the frame's original URL and `local_path` the
    /// resolved signed URL.
    pub async fn download_frame_image(
        &self,
        project_id: &str,
        frame_id: &str,
        customer_alias: &str,
    ) -> DownloadResult {
        match self
            .try_download_frame_image(project_id, frame_id, customer_alias)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Failed to download frame {}: {}", frame_id, e);
                DownloadResult::failed(frame_id, e.to_string())
            }
        }
    }

    async fn try_download_frame_image(
        &self,
        project_id: &str,
        frame_id: &str,
        customer_alias: &str,
    ) -> Result<DownloadResult> {
        let Some(frame) = self.frames.get_frame_by_id(frame_id).await? else {
            return Ok(DownloadResult::failed(frame_id, "Frame not found"));
        };

        let Some(image_url) = frame.image_url.as_deref().filter(|url| !url.is_empty()) else {
            return Ok(DownloadResult::failed(frame_id, "No image URL"));
        };

        let signed_url = self
            .files
            .signed_download_url(
                customer_alias,
                project_id,
                ASSET_TYPE_IMAGES,
                ASSET_VERSION,
                filename_from_url(image_url),
                DEFAULT_EXPIRATION_HOURS,
            )
            .await?;

        if let Some(transfer) = &self.transfer {
            transfer.fetch_bytes(&signed_url).await?;
        }

        tracing::debug!("Resolved image for frame {}", frame_id);

        Ok(DownloadResult::succeeded(frame_id, image_url, signed_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::testutil::{frame, CountingTransfer, InMemoryContent, InMemoryFrames, StubSigner};

    fn service_with(frames: Vec<crate::model::Frame>, signer: Arc<StubSigner>) -> DownloadService {
        DownloadService::new(
            Arc::new(InMemoryFrames::new(frames)),
            Arc::new(InMemoryContent::new(Vec::new())),
            signer,
        )
    }

    #[tokio::test]
    async fn test_download_success_carries_signed_url() {
        let signer = Arc::new(StubSigner::new());
        let service = service_with(
            vec![frame("f1", "s1", 1, Some("https://cdn/images/shot.jpg"))],
            signer,
        );

        let result = service.download_frame_image("p1", "f1", "acme").await;
        assert!(result.success);
        assert!(result.error.is_none());
        assert_eq!(result.image_path, "https://cdn/images/shot.jpg");
        assert_eq!(
            result.local_path.as_deref(),
            Some("https://signed.example.com/shot.jpg")
        );
    }

    #[tokio::test]
    async fn test_missing_frame() {
        let signer = Arc::new(StubSigner::new());
        let service = service_with(Vec::new(), signer.clone());

        let result = service.download_frame_image("p1", "ghost", "acme").await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Frame not found"));
        assert_eq!(signer.calls(), 0);
    }

    #[tokio::test]
    async fn test_frame_without_image() {
        let signer = Arc::new(StubSigner::new());
        let service = service_with(vec![frame("f1", "s1", 1, None)], signer.clone());

        let result = service.download_frame_image("p1", "f1", "acme").await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("No image URL"));
        assert_eq!(signer.calls(), 0);

        let empty_url_signer = Arc::new(StubSigner::new());
        let service = service_with(vec![frame("f2", "s1", 2, Some(""))], empty_url_signer);
        let result = service.download_frame_image("p1", "f2", "acme").await;
        assert_eq!(result.error.as_deref(), Some("No image URL"));
    }

    #[tokio::test]
    async fn test_resolution_failure_is_absorbed() {
        let signer = Arc::new(StubSigner::new().fail_on("shot.jpg"));
        let service = service_with(
            vec![frame("f1", "s1", 1, Some("https://cdn/images/shot.jpg"))],
            signer,
        );

        let result = service.download_frame_image("p1", "f1", "acme").await;
        assert!(!result.success);
        assert!(result.error.as_deref().unwrap().contains("shot.jpg"));
        assert!(result.local_path.is_none());
    }

    #[tokio::test]
    async fn test_transfer_runs_after_resolution() {
        let signer = Arc::new(StubSigner::new());
        let transfer = Arc::new(CountingTransfer::new());
        let service = service_with(
            vec![frame("f1", "s1", 1, Some("https://cdn/images/shot.jpg"))],
            signer,
        )
        .with_transfer(transfer.clone());

        let result = service.download_frame_image("p1", "f1", "acme").await;
        assert!(result.success);
        assert_eq!(transfer.calls(), 1);
    }

    #[tokio::test]
    async fn test_transfer_failure_fails_item() {
        let signer = Arc::new(StubSigner::new());
        let transfer = Arc::new(CountingTransfer::failing());
        let service = service_with(
            vec![frame("f1", "s1", 1, Some("https://cdn/images/shot.jpg"))],
            signer,
        )
        .with_transfer(transfer);

        let result = service.download_frame_image("p1", "f1", "acme").await;
        assert!(!result.success);
        assert!(result.error.is_some());
    }
}
