//! Immutable template tables for towers and enemies.
//!
//! Instances copy the fields they need at spawn time; nothing here is ever
//! mutated.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, TowerKind};

/// Optional per-kind special ability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpecialAbility {
    /// Instant hit; damage is multiplied on a successful roll.
    Critical { chance: f64, multiplier: f64 },
    /// Splash projectile; damage attenuates linearly with distance.
    Explosion { radius: f64, falloff: f64 },
}

/// Tower template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TowerSpec {
    pub kind: TowerKind,
    pub cost: u32,
    pub damage: u32,
    pub range: f64,
    /// Shots per second.
    pub fire_rate: f64,
    /// Projectile speed (units/tick). Unused by instant-hit kinds.
    pub projectile_speed: f64,
    /// Projectile draw radius.
    pub projectile_size: f64,
    pub projectile_color: &'static str,
    pub color: &'static str,
    /// First wave at which this kind may be placed.
    pub unlock_wave: u32,
    pub special: Option<SpecialAbility>,
}

/// Enemy template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnemySpec {
    pub kind: EnemyKind,
    pub health: u32,
    /// Units per tick.
    pub speed: f64,
    pub reward: u32,
    pub size: f64,
    pub color: &'static str,
}

const BASIC_TOWER: TowerSpec = TowerSpec {
    kind: TowerKind::Basic,
    cost: 50,
    damage: 10,
    range: 120.0,
    fire_rate: 1.0,
    projectile_speed: 6.0,
    projectile_size: 4.0,
    projectile_color: "#4fc3f7",
    color: "#2196f3",
    unlock_wave: 1,
    special: None,
};

const RAPID_TOWER: TowerSpec = TowerSpec {
    kind: TowerKind::Rapid,
    cost: 100,
    damage: 5,
    range: 100.0,
    fire_rate: 4.0,
    projectile_speed: 8.0,
    projectile_size: 3.0,
    projectile_color: "#aed581",
    color: "#4caf50",
    unlock_wave: 3,
    special: None,
};

const SNIPER_TOWER: TowerSpec = TowerSpec {
    kind: TowerKind::Sniper,
    cost: 200,
    damage: 50,
    range: 250.0,
    fire_rate: 0.5,
    projectile_speed: 0.0,
    projectile_size: 2.0,
    projectile_color: "#fff176",
    color: "#9c27b0",
    unlock_wave: 5,
    special: Some(SpecialAbility::Critical {
        chance: 0.2,
        multiplier: 3.0,
    }),
};

const BOMBER_TOWER: TowerSpec = TowerSpec {
    kind: TowerKind::Bomber,
    cost: 250,
    damage: 30,
    range: 140.0,
    fire_rate: 0.6,
    projectile_speed: 4.0,
    projectile_size: 6.0,
    projectile_color: "#ff8a65",
    color: "#ff5722",
    unlock_wave: 7,
    special: Some(SpecialAbility::Explosion {
        radius: 60.0,
        falloff: 0.5,
    }),
};

const BASIC_ENEMY: EnemySpec = EnemySpec {
    kind: EnemyKind::Basic,
    health: 50,
    speed: 1.0,
    reward: 10,
    size: 10.0,
    color: "#e53935",
};

const FAST_ENEMY: EnemySpec = EnemySpec {
    kind: EnemyKind::Fast,
    health: 30,
    speed: 2.0,
    reward: 15,
    size: 8.0,
    color: "#ffb300",
};

const STRONG_ENEMY: EnemySpec = EnemySpec {
    kind: EnemyKind::Strong,
    health: 150,
    speed: 0.6,
    reward: 25,
    size: 14.0,
    color: "#6d4c41",
};

const BOSS_ENEMY: EnemySpec = EnemySpec {
    kind: EnemyKind::Boss,
    health: 600,
    speed: 0.4,
    reward: 100,
    size: 20.0,
    color: "#212121",
};

/// Look up the template for a tower kind.
pub fn tower_spec(kind: TowerKind) -> &'static TowerSpec {
    match kind {
        TowerKind::Basic => &BASIC_TOWER,
        TowerKind::Rapid => &RAPID_TOWER,
        TowerKind::Sniper => &SNIPER_TOWER,
        TowerKind::Bomber => &BOMBER_TOWER,
    }
}

/// Look up the template for an enemy kind.
pub fn enemy_spec(kind: EnemyKind) -> &'static EnemySpec {
    match kind {
        EnemyKind::Basic => &BASIC_ENEMY,
        EnemyKind::Fast => &FAST_ENEMY,
        EnemyKind::Strong => &STRONG_ENEMY,
        EnemyKind::Boss => &BOSS_ENEMY,
    }
}

impl TowerSpec {
    /// Minimum milliseconds between shots.
    pub fn cooldown_ms(&self) -> f64 {
        1000.0 / self.fire_rate
    }
}
