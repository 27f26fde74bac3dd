//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use googly_stage::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, FrameControl};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Behaviours
pub use crate::core::behaviour::{Behaviour, BehaviourId};
pub use crate::core::playback::{IntroVideoController, MediaPlayer, TransitionState};
pub use crate::core::pupil::{EyeballController, PupilOffsetCalculator};

// Scenes
pub use crate::core::scene::{LoadScene, SceneLoaded, SceneRegistry};

// World, config and errors
pub use crate::core::config::{GameConfig, IntroConfig, PupilConfig};
pub use crate::core::error::BehaviourError;
pub use crate::core::world::EntityId;
