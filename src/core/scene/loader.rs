//=========================================================================
// Scene Loader
//=========================================================================
//
// Applies scene load requests at the frame boundary.
//
// Loading a scene destroys every registered behaviour, despawns the
// entities the previous scene's builder spawned (detaching their media
// players), marks the new scene active and runs the builder registered
// for it (if any). Entities spawned outside a builder persist.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::SceneEntry;
use crate::core::behaviour::BehaviourRegistry;
use crate::core::globals::GlobalContext;
use crate::core::world::EntityId;

//=== Messages ============================================================

/// Request to load a scene by name, published on the message bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadScene {
    pub name: String,
}

impl LoadScene {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Published after a scene has been loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneLoaded {
    pub entry: SceneEntry,
}

//=== SceneBuilder ========================================================

/// Populates a freshly loaded scene.
pub type SceneBuilder = Box<dyn FnMut(&mut BehaviourRegistry, &mut GlobalContext) + Send>;

//=== SceneLoader =========================================================

#[derive(Default)]
pub struct SceneLoader {
    builders: HashMap<String, SceneBuilder>,

    /// Entities spawned by the active scene's builder.
    scene_entities: Vec<EntityId>,
}

impl SceneLoader {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    /// Registers the builder that runs whenever `name` is loaded.
    pub fn register_builder<F>(&mut self, name: impl Into<String>, builder: F)
    where
        F: FnMut(&mut BehaviourRegistry, &mut GlobalContext) + Send + 'static,
    {
        let name = name.into();
        if self.builders.insert(name.clone(), Box::new(builder)).is_some() {
            warn!("Scene builder for '{}' was already registered and has been replaced", name);
        }
    }

    pub fn has_builder(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Entities owned by the active scene.
    pub fn scene_entities(&self) -> &[EntityId] {
        &self.scene_entities
    }

    //--- Request Processing -----------------------------------------------

    /// Loads every scene in `requests`, in order.
    pub fn process_requests<I>(
        &mut self,
        requests: I,
        behaviours: &mut BehaviourRegistry,
        context: &mut GlobalContext,
    ) where
        I: IntoIterator<Item = LoadScene>,
    {
        for request in requests {
            self.load_internal(&request.name, behaviours, context);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn load_internal(
        &mut self,
        name: &str,
        behaviours: &mut BehaviourRegistry,
        context: &mut GlobalContext,
    ) {
        let Some(entry) = context.scene_registry.find(name).cloned() else {
            warn!("Attempted to load unregistered scene '{}'", name);
            return;
        };

        debug!(
            "Unloading {:?}, destroying {} behaviours and {} entities",
            context.active_scene.as_ref().map(|e| e.name.as_str()),
            behaviours.len(),
            self.scene_entities.len()
        );
        behaviours.clear(context);
        self.unload_entities(context);

        context.active_scene = Some(entry.clone());
        match self.builders.get_mut(&entry.name) {
            Some(builder) => {
                let existing: HashSet<EntityId> = context.world.ids().collect();
                builder(behaviours, context);
                self.scene_entities = context
                    .world
                    .ids()
                    .filter(|id| !existing.contains(id))
                    .collect();
            }
            None => debug!("No builder registered for scene '{}'", entry.name),
        }

        info!("Loaded scene '{}' (index {})", entry.name, entry.index);
        context.message_bus.push(SceneLoaded { entry });
    }

    fn unload_entities(&mut self, context: &mut GlobalContext) {
        for id in self.scene_entities.drain(..) {
            context.media.detach(id);
            context.world.despawn(id);
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
