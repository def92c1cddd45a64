//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the playfield (world units, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds, derived from `tick`.
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    /// Angle to another position in radians (atan2 convention, 0 = +x).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Linear interpolation toward `other` by `t` (0.0 = self, 1.0 = other).
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        DVec2::from(*self).lerp(DVec2::from(*other), t).into()
    }

    /// Move up to `step` units toward `target`, never past it.
    pub fn step_toward(&self, target: &Position, step: f64) -> Position {
        let from = DVec2::from(*self);
        let delta = DVec2::from(*target) - from;
        let distance = delta.length();
        if distance <= step || distance == 0.0 {
            return *target;
        }
        (from + delta / distance * step).into()
    }

    /// Offset by a velocity-like delta.
    pub fn offset(&self, dx: f64, dy: f64) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl SimTime {
    /// Milliseconds per tick at the fixed tick rate.
    pub fn dt_ms(&self) -> f64 {
        crate::constants::DT_MS
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms = (self.tick * 1000) as f64 / crate::constants::TICK_RATE as f64;
    }
}
