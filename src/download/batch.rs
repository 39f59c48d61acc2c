//! Chunked concurrent batch downloads.

use futures::future;

use crate::download::DownloadService;
use crate::model::DownloadResult;

impl DownloadService {
    /// Download a batch of frames with the configured concurrency.
    ///
    /// See [`Self::download_batch_with_concurrency`].
    pub async fn download_batch(
        &self,
        project_id: &str,
        frame_ids: &[String],
        customer_alias: &str,
    ) -> Vec<DownloadResult> {
        self.download_batch_with_concurrency(
            project_id,
            frame_ids,
            customer_alias,
            self.options.concurrency,
        )
        .await
    }

    /// Download many frames, at most `concurrency` in flight at once.
    ///
    /// IDs are processed in consecutive chunks of `concurrency`; a chunk
    /// must fully settle before the next one starts, which bounds the
    /// simultaneous network operations without any shared counter. The
    /// result list matches the input order, one entry per ID (duplicates
    /// are downloaded independently), and the call itself never fails —
    /// per-item failures are carried inside the results.
    ///
    /// Dropping the returned future cancels in-flight items and prevents
    /// later chunks from starting; a partially completed chunk is not
    /// rolled back.
    pub async fn download_batch_with_concurrency(
        &self,
        project_id: &str,
        frame_ids: &[String],
        customer_alias: &str,
        concurrency: usize,
    ) -> Vec<DownloadResult> {
        let concurrency = concurrency.max(1);
        let mut results = Vec::with_capacity(frame_ids.len());

        for chunk in frame_ids.chunks(concurrency) {
            let downloads = chunk
                .iter()
                .map(|frame_id| self.download_frame_image(project_id, frame_id, customer_alias));
            results.extend(future::join_all(downloads).await);
        }

        let failed = results.iter().filter(|r| !r.success).count();
        if failed > 0 {
            tracing::warn!("Batch finished with {} of {} failed", failed, results.len());
        } else {
            tracing::debug!("Batch finished: {} downloads", results.len());
        }

        results
    }
}
