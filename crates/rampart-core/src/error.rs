//! Error types.
//!
//! Only rejected actions and bad configuration are errors. Stale references,
//! empty target scans and idle schedules are normal outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::TowerKind;

/// Why a placement request was refused. State is unchanged on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason")]
pub enum PlacementError {
    #[error("no tower kind selected")]
    NoSelection,
    #[error("towers cannot be placed right now")]
    NotAccepting,
    #[error("{kind:?} unlocks at wave {unlock_wave}")]
    Locked { kind: TowerKind, unlock_wave: u32 },
    #[error("need ${cost}, have ${available}")]
    InsufficientFunds { cost: u32, available: u32 },
    #[error("too close to another tower")]
    TooCloseToTower,
    #[error("too close to the path")]
    TooCloseToPath,
    #[error("outside the playable area")]
    OutOfBounds,
}

/// Invalid simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("path needs at least 2 waypoints, got {0}")]
    PathTooShort(usize),
    #[error("path segment {0} has zero length")]
    DegenerateSegment(usize),
    #[error("path segment {0} is not finite or is too long")]
    SegmentTooLong(usize),
}
