//! Content hierarchy entities: storyboards, scenes, and frames.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single image-bearing shot inside a scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub id: String,
    pub scene_id: String,
    pub frame_number: u32,

    #[serde(default)]
    pub description: String,

    pub shot_type: ShotType,

    /// Duration in seconds.
    #[serde(default = "default_frame_duration")]
    pub duration: f32,

    /// Source image URL. `None` or empty means no image has been
    /// generated for this frame yet.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Frame {
    /// Whether this frame carries a non-empty image URL.
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

fn default_frame_duration() -> f32 {
    1.0
}

/// An ordered collection of frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub frames: Vec<Frame>,
}

/// An ordered collection of scenes belonging to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storyboard {
    pub id: String,
    pub project_id: String,
    pub title: String,

    #[serde(default)]
    pub scenes: Vec<Scene>,
}

/// Camera shot type of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotType {
    WideShot,
    ExtremeWideShot,
    #[default]
    MediumShot,
    MediumCloseUp,
    CloseUp,
    ExtremeCloseUp,
    EstablishingShot,
    OverTheShoulder,
    TwoShot,
    PovShot,
    LowAngle,
    HighAngle,
    TrackingShot,
    AerialShot,
    InsertShot,
    ReactionShot,
}

impl ShotType {
    /// Stable wire name, as embedded in manifest metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotType::WideShot => "WIDE_SHOT",
            ShotType::ExtremeWideShot => "EXTREME_WIDE_SHOT",
            ShotType::MediumShot => "MEDIUM_SHOT",
            ShotType::MediumCloseUp => "MEDIUM_CLOSE_UP",
            ShotType::CloseUp => "CLOSE_UP",
            ShotType::ExtremeCloseUp => "EXTREME_CLOSE_UP",
            ShotType::EstablishingShot => "ESTABLISHING_SHOT",
            ShotType::OverTheShoulder => "OVER_THE_SHOULDER",
            ShotType::TwoShot => "TWO_SHOT",
            ShotType::PovShot => "POV_SHOT",
            ShotType::LowAngle => "LOW_ANGLE",
            ShotType::HighAngle => "HIGH_ANGLE",
            ShotType::TrackingShot => "TRACKING_SHOT",
            ShotType::AerialShot => "AERIAL_SHOT",
            ShotType::InsertShot => "INSERT_SHOT",
            ShotType::ReactionShot => "REACTION_SHOT",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Granularity at which the content tree is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentLevel {
    /// All storyboards of a project.
    Project,
    /// One storyboard and everything below it.
    Storyboard,
    /// The frames of one scene.
    Scene,
    /// A single frame.
    Frame,
}

impl fmt::Display for ContentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentLevel::Project => write!(f, "project"),
            ContentLevel::Storyboard => write!(f, "storyboard"),
            ContentLevel::Scene => write!(f, "scene"),
            ContentLevel::Frame => write!(f, "frame"),
        }
    }
}
