//! Weak target references.
//!
//! Towers and projectiles hold the hecs `Entity` of their target. Handles are
//! generational, so a removed enemy never aliases a later spawn; resolving a
//! stale handle simply yields `None`.

use hecs::{Entity, World};

use rampart_core::components::Enemy;
use rampart_core::types::Position;

/// Non-owning link to an enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Target(pub Option<Entity>);

impl Target {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn to(entity: Entity) -> Self {
        Self(Some(entity))
    }
}

/// Current position of a still-live enemy.
pub fn resolve(world: &World, entity: Entity) -> Option<Position> {
    if !world.contains(entity) || world.get::<&Enemy>(entity).is_err() {
        return None;
    }
    world.get::<&Position>(entity).ok().map(|pos| *pos)
}

/// Spawn serial of a still-live enemy.
pub fn serial_of(world: &World, target: Target) -> Option<u64> {
    let entity = target.0?;
    world.get::<&Enemy>(entity).ok().map(|enemy| enemy.serial)
}
