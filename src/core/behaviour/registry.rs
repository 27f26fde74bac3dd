//=========================================================================
// Behaviour Registry
//=========================================================================
//
// Explicit registration and ordered per-frame dispatch of behaviours.
//
// Behaviours update in registration order. A behaviour registered during
// a frame starts on the next call to `update`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::Behaviour;
use crate::core::globals::GlobalContext;

//=== BehaviourId =========================================================

/// Handle returned by [`BehaviourRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BehaviourId(u64);

//=== BehaviourRegistry ===================================================

struct Slot {
    id: BehaviourId,
    behaviour: Box<dyn Behaviour>,
    started: bool,
}

/// Owns the active behaviours and drives their lifecycle.
#[derive(Default)]
pub struct BehaviourRegistry {
    slots: Vec<Slot>,
    next_id: u64,
}

impl BehaviourRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    /// Registers a behaviour. It starts on the next frame.
    pub fn register<B>(&mut self, behaviour: B) -> BehaviourId
    where
        B: Behaviour + 'static,
    {
        let id = BehaviourId(self.next_id);
        self.next_id += 1;

        debug!("Registered behaviour {} as {:?}", behaviour.name(), id);
        self.slots.push(Slot {
            id,
            behaviour: Box::new(behaviour),
            started: false,
        });
        id
    }

    /// Removes a behaviour, calling `on_destroy` if it had started.
    ///
    /// Returns false if the id is unknown.
    pub fn deregister(&mut self, id: BehaviourId, context: &mut GlobalContext) -> bool {
        let Some(pos) = self.slots.iter().position(|slot| slot.id == id) else {
            warn!("Behaviour {:?} not registered, skipping removal", id);
            return false;
        };

        let mut slot = self.slots.remove(pos);
        debug!("Deregistering behaviour {} ({:?})", slot.behaviour.name(), id);
        if slot.started {
            slot.behaviour.on_destroy(context);
        }
        true
    }

    /// Removes every behaviour, calling `on_destroy` on started ones.
    pub fn clear(&mut self, context: &mut GlobalContext) {
        debug!("Clearing {} behaviours", self.slots.len());
        for mut slot in self.slots.drain(..) {
            if slot.started {
                slot.behaviour.on_destroy(context);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, id: BehaviourId) -> bool {
        self.slots.iter().any(|slot| slot.id == id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    //--- Update Loop ------------------------------------------------------

    /// Starts pending behaviours, then updates all of them in order.
    pub fn update(&mut self, context: &mut GlobalContext, dt: f32) {
        for slot in self.slots.iter_mut().filter(|slot| !slot.started) {
            slot.started = true;
            slot.behaviour.on_start(context);
        }

        for slot in &mut self.slots {
            slot.behaviour.update(context, dt);
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
