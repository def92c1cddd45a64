//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Tower archetype. Keys the immutable `TowerSpec` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Cheap single-target projectile tower.
    #[default]
    Basic,
    /// Fast-firing, low-damage projectile tower.
    Rapid,
    /// Long-range instant-hit tower with critical strikes.
    Sniper,
    /// Slow splash-damage tower.
    Bomber,
}

impl TowerKind {
    pub const ALL: [TowerKind; 4] = [
        TowerKind::Basic,
        TowerKind::Rapid,
        TowerKind::Sniper,
        TowerKind::Bomber,
    ];
}

/// Enemy archetype. Keys the immutable `EnemySpec` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Basic,
    Fast,
    Strong,
    Boss,
}

/// Projectile flavor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectileKind {
    /// Flat damage to the target only.
    Standard,
    /// Full damage to the target plus distance-attenuated splash.
    Bomber { explosion_radius: f64, falloff: f64 },
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    /// Countdown before wave 1.
    Preparation,
    /// Enemies are spawning or alive.
    WaveActive,
    /// Wave cleared; bonus pending and next-wave countdown running.
    WaveComplete,
    /// Lives reached zero. Terminal.
    GameOver,
}

impl GamePhase {
    /// A session is underway and has not ended.
    pub fn is_in_session(self) -> bool {
        matches!(
            self,
            GamePhase::Preparation | GamePhase::WaveActive | GamePhase::WaveComplete
        )
    }
}

/// Phase timer identity. At most one of each runs at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    Preparation,
    WaveBonus,
    NextWaveCountdown,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
