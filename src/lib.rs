//=========================================================================
// Googly Stage — Library Root
//
// Frame-driven 2D game behaviours, independent of any particular engine.
//
// Responsibilities:
// - Expose the frame driver (`Engine`, `EngineBuilder`)
// - Expose the behaviours: googly-eye pupils (`EyeballController`) and
//   intro video → next scene (`IntroVideoController`)
// - Expose the minimal collaborators they run against (world, media
//   players, scene registry and loader)
//
// Typical usage:
// ```no_run
// use googly_stage::prelude::*;
//
// let mut engine = EngineBuilder::new().build();
// engine.run();
// ```
//
//=========================================================================

//=== Public Modules ======================================================
//
// `core` contains the behaviours, their collaborators and shared state.
//
pub mod core;

//=== Internal Modules ====================================================
//
// `engine` defines the frame driver.
//
mod engine;

pub mod prelude;

//=== Public Exports ======================================================

pub use engine::{Engine, EngineBuilder, FrameControl};
