//=========================================================================
// End-of-Playback Transition
//=========================================================================
//
// Decides what happens when the intro video finishes.
//
// State machine:
//   Idle ──on_playback_finished()──> Validating ──┬─> Loading   (request sent)
//                                                 └─> Rejected  (diagnostic)
//
// Loading and Rejected are terminal. Later notifications are ignored.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::diagnostics::Diagnostics;
use crate::core::error::BehaviourError;
use crate::core::message_bus::MessageBus;
use crate::core::scene::{LoadScene, SceneRegistry};

//=== TransitionState =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    /// Waiting for the playback-finished notification.
    #[default]
    Idle,

    /// Looking the target up in the scene registry.
    Validating,

    /// A load request for the target scene was issued.
    Loading,

    /// The target scene is unknown; nothing was loaded.
    Rejected,
}

impl TransitionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Loading | Self::Rejected)
    }
}

//=== EndOfPlaybackTransition =============================================

/// Validates and requests the scene that follows playback.
#[derive(Debug, Clone)]
pub struct EndOfPlaybackTransition {
    target_scene_name: String,
    state: TransitionState,
}

impl EndOfPlaybackTransition {
    pub fn new(target_scene_name: impl Into<String>) -> Self {
        Self {
            target_scene_name: target_scene_name.into(),
            state: TransitionState::Idle,
        }
    }

    pub fn target_scene_name(&self) -> &str {
        &self.target_scene_name
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Handles the playback-finished notification.
    ///
    /// On success pushes a [`LoadScene`] onto `bus`. On failure reports
    /// [`BehaviourError::UnknownTarget`] and leaves `bus` untouched. Calls
    /// after a terminal state return that state without side effects.
    pub fn on_playback_finished(
        &mut self,
        registry: &SceneRegistry,
        bus: &mut MessageBus,
        diagnostics: &mut Diagnostics,
    ) -> TransitionState {
        if self.state.is_terminal() {
            debug!(
                "Transition to '{}' already {:?}, ignoring notification",
                self.target_scene_name, self.state
            );
            return self.state;
        }

        self.state = TransitionState::Validating;
        debug!(
            "Validating scene '{}' against {} registered scenes",
            self.target_scene_name,
            registry.len()
        );

        self.state = match registry.find(&self.target_scene_name) {
            Some(entry) => {
                info!(
                    "Playback finished, loading scene '{}' (index {})",
                    entry.name, entry.index
                );
                bus.push(LoadScene::new(entry.name.clone()));
                TransitionState::Loading
            }
            None => {
                diagnostics.report(BehaviourError::UnknownTarget {
                    scene: self.target_scene_name.clone(),
                });
                TransitionState::Rejected
            }
        };

        self.state
    }
}

//=========================================================================
// Tests
//=========================================================================
