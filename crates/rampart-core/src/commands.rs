//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, so they never
//! interleave with a half-finished simulation step.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session lifecycle ---
    /// Start a new session from the main menu.
    StartSession,
    /// Discard the current session and return to the main menu.
    ResetSession,
    /// Freeze the simulation, timers included.
    Pause,
    /// Resume a paused simulation.
    Resume,

    // --- Building ---
    /// Arm a tower kind for the next placement.
    SelectTowerKind { kind: TowerKind },
    /// Disarm the pending tower kind.
    ClearSelection,
    /// Place a tower. Uses the armed kind when `kind` is `None`.
    PlaceTower {
        kind: Option<TowerKind>,
        position: Position,
    },

    // --- Inspection ---
    /// Select the tower occupying the grid cell at `position` (or deselect).
    SelectTower { position: Position },
}
