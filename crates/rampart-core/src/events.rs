//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::state::GameSummary;

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A tower was built.
    TowerPlaced { kind: TowerKind },
    /// A tower fired (instant hit or projectile launch).
    ShotFired { kind: TowerKind },
    /// An instant-hit shot rolled a critical.
    CriticalHit { damage: u32 },
    /// A standard projectile reached its target.
    Impact { kind: TowerKind },
    /// A splash projectile detonated.
    Explosion { enemies_hit: u32 },
    /// An enemy was defeated.
    EnemyDefeated { kind: EnemyKind, reward: u32 },
    /// An enemy completed the path.
    Breach { lives_remaining: u32 },
    WaveStarted { wave: u32 },
    WaveCompleted { wave: u32, bonus: u32 },
    GameOver { summary: GameSummary },
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
