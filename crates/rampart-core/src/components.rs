//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::specs::SpecialAbility;

/// A placed tower. Copies its spec's combat fields at placement time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub kind: TowerKind,
    pub damage: u32,
    pub range: f64,
    pub fire_rate: f64,
    pub projectile_speed: f64,
    pub projectile_size: f64,
    pub projectile_color: String,
    pub special: Option<SpecialAbility>,
    /// Simulation time of the last shot (ms). `None` until the first shot.
    pub last_shot_ms: Option<f64>,
    /// Current aim angle (radians, atan2 convention).
    pub aim_angle: f64,
}

/// A live enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Spawn order within the session. Breaks targeting ties.
    pub serial: u64,
    /// Units per tick.
    pub speed: f64,
    /// Money granted on defeat (already wave-scaled).
    pub reward: u32,
    pub size: f64,
    pub color: String,
    /// Pulsing animation phase, kept in `[0, TAU)`.
    pub pulse: f64,
}

/// Hit points. Invariant: `current <= max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

/// Progress along the path.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PathProgress {
    /// Index of the current segment's starting waypoint.
    pub index: usize,
    /// Distance traveled into the current segment.
    pub progress: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Tower kind that fired it (for impact audio).
    pub source: TowerKind,
    pub damage: u32,
    /// Base speed (units/tick).
    pub speed: f64,
    pub size: f64,
    pub color: String,
}
