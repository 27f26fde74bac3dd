//=========================================================================
// Global Engine State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GlobalSystems: BehaviourRegistry + SceneLoader (owned by the engine)
//   GlobalContext: World + MediaPlayers + SceneRegistry + MessageBus
//                  + Diagnostics (passed to behaviours)
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;
mod global_systems;

//=== Public API ==========================================================

pub use global_context::GlobalContext;
pub use global_systems::GlobalSystems;
