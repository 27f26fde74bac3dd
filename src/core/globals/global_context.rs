//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for behaviours.
//
// Contains the state behaviours read and write each frame:
// - world: entity positions and body velocities
// - media: playback sources
// - scene_registry / active_scene: loadable scenes and the current one
// - message_bus: per-frame requests (LoadScene) and events (SceneLoaded)
// - diagnostics: reported behaviour errors
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::diagnostics::Diagnostics;
use crate::core::message_bus::MessageBus;
use crate::core::playback::MediaPlayers;
use crate::core::scene::{SceneEntry, SceneRegistry};
use crate::core::world::World;

//=== GlobalContext =======================================================

/// Shared context data handed to behaviours during their lifecycle.
///
/// Separates what behaviours may touch from the systems that drive them
/// (see [`super::GlobalSystems`]).
#[derive(Default)]
pub struct GlobalContext {
    /// Transform provider and body velocity source.
    pub world: World,

    /// Playback sources keyed by the entity they are attached to.
    pub media: MediaPlayers,

    /// Scenes known at build time, in build order.
    pub scene_registry: SceneRegistry,

    /// Scene most recently loaded by the scene loader.
    pub active_scene: Option<SceneEntry>,

    /// Per-frame typed messages.
    pub message_bus: MessageBus,

    /// One-shot error reports from behaviours.
    pub diagnostics: Diagnostics,
}

impl GlobalContext {
    /// Creates a context with an empty world and registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context for the given scene registry.
    pub fn with_registry(scene_registry: SceneRegistry) -> Self {
        Self {
            scene_registry,
            ..Self::default()
        }
    }
}
