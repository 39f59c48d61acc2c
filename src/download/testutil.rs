//! Shared in-memory fixtures for download tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::FileService;
use crate::error::{Error, Result};
use crate::model::{Frame, Scene, ShotType, Storyboard};
use crate::repository::{ContentRepository, FrameRepository};
use crate::transfer::ByteTransfer;

pub(crate) fn frame(id: &str, scene_id: &str, frame_number: u32, image_url: Option<&str>) -> Frame {
    Frame {
        id: id.to_string(),
        scene_id: scene_id.to_string(),
        frame_number,
        description: String::new(),
        shot_type: ShotType::default(),
        duration: 1.5,
        image_url: image_url.map(String::from),
    }
}

pub(crate) fn scene(id: &str, frames: Vec<Frame>) -> Scene {
    Scene {
        id: id.to_string(),
        title: format!("Scene {}", id),
        frames,
    }
}

pub(crate) fn storyboard(id: &str, project_id: &str, title: &str, scenes: Vec<Scene>) -> Storyboard {
    Storyboard {
        id: id.to_string(),
        project_id: project_id.to_string(),
        title: title.to_string(),
        scenes,
    }
}

/// Frame repository over a fixed list.
pub(crate) struct InMemoryFrames {
    frames: Vec<Frame>,
}

impl InMemoryFrames {
    pub(crate) fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

#[async_trait]
impl FrameRepository for InMemoryFrames {
    async fn get_frame_by_id(&self, frame_id: &str) -> Result<Option<Frame>> {
        Ok(self.frames.iter().find(|f| f.id == frame_id).cloned())
    }

    async fn get_frames_by_scene_id(&self, scene_id: &str) -> Result<Vec<Frame>> {
        Ok(self
            .frames
            .iter()
            .filter(|f| f.scene_id == scene_id)
            .cloned()
            .collect())
    }
}

/// Content repository over a fixed list of storyboards.
pub(crate) struct InMemoryContent {
    storyboards: Vec<Storyboard>,
}

impl InMemoryContent {
    pub(crate) fn new(storyboards: Vec<Storyboard>) -> Self {
        Self { storyboards }
    }
}

#[async_trait]
impl ContentRepository for InMemoryContent {
    async fn get_storyboard(&self, storyboard_id: &str) -> Result<Option<Storyboard>> {
        Ok(self
            .storyboards
            .iter()
            .find(|sb| sb.id == storyboard_id)
            .cloned())
    }

    async fn get_storyboards(&self, project_id: &str) -> Result<Vec<Storyboard>> {
        Ok(self
            .storyboards
            .iter()
            .filter(|sb| sb.project_id == project_id)
            .cloned()
            .collect())
    }
}

/// Instrumented signed URL stub: counts calls, tracks how many
/// resolutions overlap, and can refuse selected filenames.
pub(crate) struct StubSigner {
    delay: Duration,
    fail_filenames: HashSet<String>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    high_water: AtomicUsize,
}

impl StubSigner {
    pub(crate) fn new() -> Self {
        Self {
            delay: Duration::ZERO,
            fail_filenames: HashSet::new(),
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            high_water: AtomicUsize::new(0),
        }
    }

    /// Hold each resolution open for `delay` so overlap is observable.
    pub(crate) fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new()
        }
    }

    /// Refuse to sign the given filename.
    pub(crate) fn fail_on(mut self, filename: &str) -> Self {
        self.fail_filenames.insert(filename.to_string());
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Maximum number of resolutions that were in flight at once.
    pub(crate) fn high_water(&self) -> usize {
        self.high_water.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileService for StubSigner {
    async fn signed_download_url(
        &self,
        _customer_alias: &str,
        _project_id: &str,
        _asset_type: &str,
        _version: &str,
        filename: &str,
        _expiration_hours: u32,
    ) -> Result<String> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.high_water.fetch_max(current, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_filenames.contains(filename) {
            return Err(Error::UrlResolution(format!("refused to sign {}", filename)));
        }

        Ok(format!("https://signed.example.com/{}", filename))
    }
}

/// Byte transfer stub that counts fetches and can be made to fail.
pub(crate) struct CountingTransfer {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingTransfer {
    pub(crate) fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ByteTransfer for CountingTransfer {
    async fn fetch_bytes(&self, _url: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Download("transfer failed".to_string()));
        }
        // JPEG magic prefix stands in for real image bytes.
        Ok(vec![0xFF, 0xD8, 0xFF])
    }
}
