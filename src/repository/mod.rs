//! Repository contracts for externally-owned content storage.
//!
//! The crate holds no persistent state of its own; frames and
//! storyboards live behind these traits, implemented by the embedding
//! application (local database, remote API, fixtures in tests).

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Frame, Storyboard};

/// Access to individual frames.
#[async_trait]
pub trait FrameRepository: Send + Sync {
    /// Look up a frame by ID. `None` when absent.
    async fn get_frame_by_id(&self, frame_id: &str) -> Result<Option<Frame>>;

    /// All frames of a scene, in declared order.
    async fn get_frames_by_scene_id(&self, scene_id: &str) -> Result<Vec<Frame>>;
}

/// Access to storyboards and their scene/frame trees.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Look up a storyboard by ID. `None` when absent.
    async fn get_storyboard(&self, storyboard_id: &str) -> Result<Option<Storyboard>>;

    /// All storyboards of a project, in declared order.
    async fn get_storyboards(&self, project_id: &str) -> Result<Vec<Storyboard>>;
}
