//! Progress-reporting scene and storyboard downloads.

use futures::stream::{self, Stream};

use crate::download::DownloadService;
use crate::model::{ContentLevel, DownloadProgress, FrameImageRef};

/// Root of a progress-reporting traversal.
enum ProgressScope {
    Scene(String),
    Storyboard(String),
}

/// Traversal state between emitted snapshots.
enum ProgressState {
    Resolve(ProgressScope),
    Before {
        frames: Vec<FrameImageRef>,
        index: usize,
        downloaded: usize,
    },
    Fetch {
        frames: Vec<FrameImageRef>,
        index: usize,
        downloaded: usize,
    },
    Done,
}

impl DownloadService {
    /// Download every image of a scene, yielding progress snapshots.
    ///
    /// The stream is cold: nothing is fetched until it is polled, and
    /// dropping it cancels the traversal. Each downloadable frame
    /// produces a before/after snapshot pair, downloaded strictly in
    /// order with no concurrency, so the counter always reflects
    /// completed work. A scene with no downloadable images yields a
    /// single trivially-complete snapshot.
    ///
    /// By default the counter advances for failed downloads too (it
    /// tracks attempts processed); set
    /// `DownloadOptions::count_failed_in_progress` to `false` to count
    /// successes only.
    pub fn download_scene_with_progress<'a>(
        &'a self,
        project_id: &str,
        scene_id: &str,
        customer_alias: &str,
    ) -> impl Stream<Item = DownloadProgress> + 'a {
        self.progress_stream(
            project_id.to_string(),
            customer_alias.to_string(),
            ProgressScope::Scene(scene_id.to_string()),
        )
    }

    /// Download every image of a storyboard, yielding progress
    /// snapshots across all of its scenes in order.
    ///
    /// Same contract as [`Self::download_scene_with_progress`]; a
    /// missing storyboard behaves like an empty one.
    pub fn download_storyboard_with_progress<'a>(
        &'a self,
        project_id: &str,
        storyboard_id: &str,
        customer_alias: &str,
    ) -> impl Stream<Item = DownloadProgress> + 'a {
        self.progress_stream(
            project_id.to_string(),
            customer_alias.to_string(),
            ProgressScope::Storyboard(storyboard_id.to_string()),
        )
    }

    fn progress_stream(
        &self,
        project_id: String,
        customer_alias: String,
        scope: ProgressScope,
    ) -> impl Stream<Item = DownloadProgress> + '_ {
        stream::unfold(ProgressState::Resolve(scope), move |state| {
            let project_id = project_id.clone();
            let customer_alias = customer_alias.clone();

            async move {
                match state {
                    ProgressState::Resolve(scope) => {
                        let frames = self.progress_refs(&scope).await;
                        if frames.is_empty() {
                            return Some((DownloadProgress::complete_empty(), ProgressState::Done));
                        }

                        let first = DownloadProgress::snapshot(
                            frames.len(),
                            0,
                            frames[0].image_url.clone(),
                        );
                        Some((
                            first,
                            ProgressState::Fetch {
                                frames,
                                index: 0,
                                downloaded: 0,
                            },
                        ))
                    }
                    ProgressState::Fetch {
                        frames,
                        index,
                        downloaded,
                    } => {
                        let current = &frames[index];
                        let result = self
                            .download_frame_image(&project_id, &current.frame_id, &customer_alias)
                            .await;

                        let downloaded = if result.success || self.options.count_failed_in_progress
                        {
                            downloaded + 1
                        } else {
                            downloaded
                        };

                        let snapshot = DownloadProgress::snapshot(
                            frames.len(),
                            downloaded,
                            current.image_url.clone(),
                        );

                        let next = if index + 1 < frames.len() {
                            ProgressState::Before {
                                frames,
                                index: index + 1,
                                downloaded,
                            }
                        } else {
                            ProgressState::Done
                        };
                        Some((snapshot, next))
                    }
                    ProgressState::Before {
                        frames,
                        index,
                        downloaded,
                    } => {
                        let snapshot = DownloadProgress::snapshot(
                            frames.len(),
                            downloaded,
                            frames[index].image_url.clone(),
                        );
                        Some((
                            snapshot,
                            ProgressState::Fetch {
                                frames,
                                index,
                                downloaded,
                            },
                        ))
                    }
                    ProgressState::Done => None,
                }
            }
        })
    }

    /// Downloadable refs for a traversal scope. A missing scene or
    /// storyboard yields the empty set rather than an error, so the
    /// stream still terminates with its trivially-complete snapshot.
    async fn progress_refs(&self, scope: &ProgressScope) -> Vec<FrameImageRef> {
        let collected = match scope {
            ProgressScope::Scene(id) => {
                self.collect_downloadable_refs(ContentLevel::Scene, id).await
            }
            ProgressScope::Storyboard(id) => {
                self.collect_downloadable_refs(ContentLevel::Storyboard, id)
                    .await
            }
        };

        match collected {
            Ok(refs) => refs,
            Err(e) => {
                tracing::warn!("Progress traversal has no downloadable frames: {}", e);
                Vec::new()
            }
        }
    }
}
