//! Game state snapshot: the complete visible state handed to the presentation
//! layer each tick.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;
use crate::enums::*;
use crate::events::{Alert, AudioEvent};
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub paused: bool,
    pub session: SessionView,
    pub towers: Vec<TowerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<Effect>,
    pub tower_kinds: Vec<TowerKindView>,
    pub selected_kind: Option<TowerKind>,
    pub alerts: Vec<Alert>,
    pub audio_events: Vec<AudioEvent>,
    pub score: ScoreView,
    /// Present only once the session has ended.
    pub summary: Option<GameSummary>,
}

/// Session counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionView {
    pub money: u32,
    pub lives: u32,
    pub wave: u32,
    pub difficulty: f64,
    pub wave_started: bool,
    pub wave_completed: bool,
    /// True during the pre-wave-1 countdown.
    pub preparing: bool,
    /// The phase timer currently running, if any.
    pub countdown: Option<CountdownView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownView {
    pub kind: TimerKind,
    /// Whole seconds left, rounded up.
    pub remaining_secs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub kind: TowerKind,
    pub position: Position,
    pub range: f64,
    pub aim_angle: f64,
    /// Serial of the enemy currently targeted, if it is still alive.
    pub target_serial: Option<u64>,
    /// Selected for inspection by the player.
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub serial: u64,
    pub kind: EnemyKind,
    pub position: Position,
    pub health: u32,
    pub max_health: u32,
    pub size: f64,
    pub color: String,
    pub pulse: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub position: Position,
    pub size: f64,
    pub color: String,
}

/// Per-kind build menu flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerKindView {
    pub kind: TowerKind,
    pub cost: u32,
    pub unlock_wave: u32,
    pub unlocked: bool,
    pub affordable: bool,
}

/// Running score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_defeated: u32,
    pub breaches: u32,
    pub towers_built: u32,
    pub money_earned: u32,
}

/// End-of-game summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub wave_reached: u32,
    pub enemies_defeated: u32,
    pub towers_built: u32,
    pub money_earned: u32,
    pub ticks_survived: u64,
}
