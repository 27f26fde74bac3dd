//=========================================================================
// Behaviour System
//=========================================================================
//
// Per-frame components driven explicitly by the engine.
//
// Architecture:
//   BehaviourRegistry
//     └─ slots: Vec<(BehaviourId, Box<dyn Behaviour>, started)>
//
// Flow:
//   register() → [next frame] on_start() → update(dt) every frame
//   deregister() / clear() → on_destroy()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;

//=== Module Declarations =================================================

mod registry;

//=== Public API ==========================================================

pub use registry::{BehaviourId, BehaviourRegistry};

//=== Behaviour Trait =====================================================

/// A component that runs once per frame until it is deregistered.
///
/// Only `update()` is required:
///
/// ```rust
/// # use googly_stage::prelude::*;
/// struct Spinner {
///     angle: f32,
/// }
///
/// impl Behaviour for Spinner {
///     fn update(&mut self, _context: &mut GlobalContext, dt: f32) {
///         self.angle += dt;
///     }
/// }
/// ```
pub trait Behaviour: Send {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("behaviour")
    }

    /// Called once before the first `update`.
    fn on_start(&mut self, _context: &mut GlobalContext) {}

    /// Called every frame with the frame's delta time in seconds.
    fn update(&mut self, context: &mut GlobalContext, dt: f32);

    /// Called when the behaviour is deregistered or its scene unloads.
    fn on_destroy(&mut self, _context: &mut GlobalContext) {}
}
