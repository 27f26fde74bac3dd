//=========================================================================
// Core Systems
//
// Behaviours, their collaborators and the shared state they run on.
//
// Responsibilities:
// - Per-frame behaviour lifecycle (register, start, update, destroy)
// - Googly-eye pupil math and the behaviour applying it
// - Intro playback and the end-of-playback scene transition
// - Scene registry and frame-boundary scene loading
// - Diagnostics, errors and configuration
//
// Notes:
// Everything here runs on the thread that drives the engine. The only
// channels are playback notifications and the engine's shutdown signal.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod behaviour;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod globals;
pub mod math;
pub mod message_bus;
pub mod playback;
pub mod pupil;
pub mod scene;
pub mod world;

//=== Re-exports ==========================================================

pub use behaviour::{Behaviour, BehaviourId, BehaviourRegistry};
pub use config::{EngineConfig, GameConfig, IntroConfig, PupilConfig};
pub use diagnostics::Diagnostics;
pub use error::{BehaviourError, ConfigError};
pub use globals::{GlobalContext, GlobalSystems};
pub use message_bus::MessageBus;
pub use world::{EntityId, World};
