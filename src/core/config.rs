//=========================================================================
// Configuration
//=========================================================================
//
// Authoring-time settings for the engine and both behaviours, loadable
// from RON.
//
// Example:
// ```text
// (
//     engine: (tps: 60.0),
//     eyeball: (radius: 0.35, gravity_strength: 1.0, smoothing_time: 0.1),
//     intro: (video_file_name: "Intro.mp4", next_scene_name: "Level1"),
//     scenes: ["Assets/Scenes/Intro.unity", "Assets/Scenes/Level1.unity"],
// )
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::error::ConfigError;

//=== EngineConfig ========================================================

/// Frame driver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Target frames per second for [`crate::Engine::run`].
    pub tps: f64,

    /// Upper bound on the delta time handed to behaviours, in seconds.
    pub max_frame_delta: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tps: 60.0,
            max_frame_delta: 0.1,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tps > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "engine.tps must be positive, got {}",
                self.tps
            )));
        }
        if !(self.max_frame_delta > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "engine.max_frame_delta must be positive, got {}",
                self.max_frame_delta
            )));
        }
        Ok(())
    }
}

//=== PupilConfig =========================================================

/// Googly-eye tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PupilConfig {
    /// Eyeball radius; the pupil target never leaves this circle.
    pub radius: f32,

    /// Constant downward pull on the pupil.
    pub gravity_strength: f32,

    /// Smooth-damp time constant in seconds.
    pub smoothing_time: f32,

    /// How strongly body velocity drags the pupil.
    pub inertia_scale: f32,

    /// Speed cap for the smoothed pupil, unbounded when `None`.
    pub max_speed: Option<f32>,

    /// Treat non-finite body velocity as zero instead of propagating it.
    pub reject_non_finite: bool,
}

impl Default for PupilConfig {
    fn default() -> Self {
        Self {
            radius: 0.35,
            gravity_strength: 1.0,
            smoothing_time: 0.1,
            inertia_scale: 0.1,
            max_speed: None,
            reject_non_finite: true,
        }
    }
}

impl PupilConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "eyeball.radius must be positive, got {}",
                self.radius
            )));
        }
        if !(self.smoothing_time >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "eyeball.smoothing_time must not be negative, got {}",
                self.smoothing_time
            )));
        }
        if !self.gravity_strength.is_finite() || !self.inertia_scale.is_finite() {
            return Err(ConfigError::Invalid(
                "eyeball.gravity_strength and eyeball.inertia_scale must be finite".into(),
            ));
        }
        if let Some(max_speed) = self.max_speed {
            if !(max_speed > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "eyeball.max_speed must be positive, got {}",
                    max_speed
                )));
            }
        }
        Ok(())
    }
}

//=== IntroConfig =========================================================

/// Intro video and the scene that follows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntroConfig {
    /// Directory that video file names are resolved against.
    #[serde(default = "default_media_root")]
    pub media_root: PathBuf,

    /// Video file name inside `media_root`, e.g. `Intro.mp4`.
    pub video_file_name: String,

    /// Scene to load once the video ends.
    pub next_scene_name: String,
}

fn default_media_root() -> PathBuf {
    PathBuf::from("StreamingAssets")
}

impl IntroConfig {
    pub fn new(video_file_name: impl Into<String>, next_scene_name: impl Into<String>) -> Self {
        Self {
            media_root: default_media_root(),
            video_file_name: video_file_name.into(),
            next_scene_name: next_scene_name.into(),
        }
    }

    pub fn with_media_root(mut self, media_root: impl Into<PathBuf>) -> Self {
        self.media_root = media_root.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.video_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("intro.video_file_name is empty".into()));
        }
        if self.next_scene_name.trim().is_empty() {
            return Err(ConfigError::Invalid("intro.next_scene_name is empty".into()));
        }
        Ok(())
    }
}

//=== GameConfig ==========================================================

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub eyeball: PupilConfig,

    pub intro: IntroConfig,

    /// Scene paths in build order.
    #[serde(default)]
    pub scenes: Vec<String>,
}

impl GameConfig {
    /// Parses and validates a RON document.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_ron_str(&source)?;
        info!(
            "Loaded config {} ({} scenes)",
            path.display(),
            config.scenes.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.eyeball.validate()?;
        self.intro.validate()
    }
}

//=========================================================================
// Tests
//=========================================================================
