//=========================================================================
// Scene System
//=========================================================================
//
// Build-time scene registry and frame-boundary scene loading.
//
// Flow:
//   behaviour ──push(LoadScene)──> MessageBus
//   frame end ──take::<LoadScene>()──> SceneLoader ──> active_scene
//                                                  └─> SceneLoaded
//
//=========================================================================

//=== Module Declarations =================================================

mod loader;
mod registry;

//=== Public API ==========================================================

pub use loader::{LoadScene, SceneBuilder, SceneLoaded, SceneLoader};
pub use registry::{scene_name_from_path, SceneEntry, SceneRegistry};
