//! Tower placement: validation and construction.
//!
//! Checks run in a fixed order and the first failure is reported; a rejected
//! request leaves money and the tower set untouched.

use hecs::{Entity, World};
use log::debug;

use rampart_core::components::Tower;
use rampart_core::constants::*;
use rampart_core::enums::TowerKind;
use rampart_core::error::PlacementError;
use rampart_core::events::AudioEvent;
use rampart_core::specs::tower_spec;
use rampart_core::types::Position;

use crate::path::Path;
use crate::session::{Outbox, SessionState};
use crate::world_setup;

/// Snap a point to the center of its grid cell.
pub fn snap_to_grid(position: Position) -> Position {
    let snap = |v: f64| (v / GRID_SIZE).floor() * GRID_SIZE + GRID_SIZE / 2.0;
    Position::new(snap(position.x), snap(position.y))
}

/// Whether `kind` may be built during `wave`.
pub fn is_unlocked(kind: TowerKind, wave: u32) -> bool {
    wave >= tower_spec(kind).unlock_wave
}

fn in_bounds(position: &Position) -> bool {
    (BOUNDS_MARGIN..=FIELD_WIDTH - BOUNDS_MARGIN).contains(&position.x)
        && (BOUNDS_MARGIN..=FIELD_HEIGHT - BOUNDS_MARGIN).contains(&position.y)
}

/// Validate a placement without mutating anything.
pub fn validate(
    world: &World,
    path: &Path,
    session: &SessionState,
    wave: u32,
    kind: TowerKind,
    position: Position,
) -> Result<(), PlacementError> {
    let spec = tower_spec(kind);
    if !is_unlocked(kind, wave) {
        return Err(PlacementError::Locked {
            kind,
            unlock_wave: spec.unlock_wave,
        });
    }
    if session.money < spec.cost {
        return Err(PlacementError::InsufficientFunds {
            cost: spec.cost,
            available: session.money,
        });
    }
    let crowded = world
        .query::<(&Tower, &Position)>()
        .iter()
        .any(|(_, (_, existing))| existing.distance_to(&position) < TOWER_CLEARANCE);
    if crowded {
        return Err(PlacementError::TooCloseToTower);
    }
    if path.sampled_distance(&position, PATH_SAMPLE_STEP) < PATH_CLEARANCE {
        return Err(PlacementError::TooCloseToPath);
    }
    if !in_bounds(&position) {
        return Err(PlacementError::OutOfBounds);
    }
    Ok(())
}

/// Validate and build. On success the cost is deducted and the armed
/// selection cleared.
pub fn place(
    world: &mut World,
    path: &Path,
    session: &mut SessionState,
    outbox: &mut Outbox,
    wave: u32,
    kind: TowerKind,
    position: Position,
) -> Result<Entity, PlacementError> {
    let position = snap_to_grid(position);
    validate(world, path, session, wave, kind, position)?;

    let cost = tower_spec(kind).cost;
    if !session.spend(cost) {
        return Err(PlacementError::InsufficientFunds {
            cost,
            available: session.money,
        });
    }
    let entity = world_setup::spawn_tower(world, kind, position);
    session.score.towers_built += 1;
    session.selected_kind = None;
    debug!("placed {:?} at ({}, {})", kind, position.x, position.y);
    outbox.emit(AudioEvent::TowerPlaced { kind });
    Ok(entity)
}

/// The tower occupying the grid cell containing `position`, if any.
pub fn tower_at(world: &World, position: Position) -> Option<Entity> {
    let cell = snap_to_grid(position);
    world
        .query::<(&Tower, &Position)>()
        .iter()
        .find(|(_, (_, pos))| pos.distance_to(&cell) < 1.0)
        .map(|(entity, _)| entity)
}
