//=========================================================================
// World
//=========================================================================
//
// Minimal entity store standing in for an engine's scene graph and
// physics bodies.
//
// Each entity has a 2D position. Entities spawned with a body also carry
// a velocity, which is what behaviours read as "body velocity".
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use glam::Vec2;
use log::debug;

//=== EntityId ============================================================

/// Opaque handle to an entity in the [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

//=== World ===============================================================

#[derive(Debug, Clone, Copy)]
struct Entity {
    position: Vec2,
    velocity: Option<Vec2>,
}

/// Positions and body velocities keyed by entity.
#[derive(Debug, Default)]
pub struct World {
    entities: HashMap<EntityId, Entity>,
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Spawning ---------------------------------------------------------

    /// Spawns an entity with a position and no body.
    pub fn spawn(&mut self, position: Vec2) -> EntityId {
        self.insert(Entity {
            position,
            velocity: None,
        })
    }

    /// Spawns an entity with a body moving at `velocity`.
    pub fn spawn_body(&mut self, position: Vec2, velocity: Vec2) -> EntityId {
        self.insert(Entity {
            position,
            velocity: Some(velocity),
        })
    }

    /// Removes an entity. Returns false if it did not exist.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        let removed = self.entities.remove(&id).is_some();
        if removed {
            debug!("Despawned entity {:?}", id);
        }
        removed
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Ids of every live entity, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    pub fn position(&self, id: EntityId) -> Option<Vec2> {
        self.entities.get(&id).map(|e| e.position)
    }

    /// Body velocity, or `None` if the entity is missing or has no body.
    pub fn velocity(&self, id: EntityId) -> Option<Vec2> {
        self.entities.get(&id).and_then(|e| e.velocity)
    }

    //--- Mutation ---------------------------------------------------------

    /// Sets an entity's position. Returns false if it does not exist.
    pub fn set_position(&mut self, id: EntityId, position: Vec2) -> bool {
        match self.entities.get_mut(&id) {
            Some(entity) => {
                entity.position = position;
                true
            }
            None => false,
        }
    }

    /// Sets a body's velocity. Returns false if the entity has no body.
    pub fn set_velocity(&mut self, id: EntityId, velocity: Vec2) -> bool {
        match self.entities.get_mut(&id) {
            Some(Entity {
                velocity: Some(v), ..
            }) => {
                *v = velocity;
                true
            }
            _ => false,
        }
    }

    /// Gives an existing entity a body. Returns false if it does not exist.
    pub fn attach_body(&mut self, id: EntityId, velocity: Vec2) -> bool {
        match self.entities.get_mut(&id) {
            Some(entity) => {
                entity.velocity = Some(velocity);
                true
            }
            None => false,
        }
    }

    /// Removes an entity's body, returning its last velocity.
    pub fn detach_body(&mut self, id: EntityId) -> Option<Vec2> {
        self.entities.get_mut(&id).and_then(|e| e.velocity.take())
    }

    fn insert(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, entity);
        id
    }
}

//=========================================================================
// Tests
//=========================================================================
