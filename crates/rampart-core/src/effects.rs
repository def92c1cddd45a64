//! Transient visual effects emitted as side data by the simulation.
//!
//! Pure presentation records; the simulation only ages and prunes them.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// A transient visual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    Particle {
        position: Position,
        vx: f64,
        vy: f64,
        radius: f64,
        color: String,
        alpha: f64,
        /// Remaining lifetime (ticks).
        life: u32,
        /// Initial lifetime, for alpha fade.
        max_life: u32,
    },
    FloatingText {
        position: Position,
        text: String,
        color: String,
        /// Upward drift (units/tick).
        drift: f64,
        alpha: f64,
        life: u32,
        max_life: u32,
    },
    ExplosionRing {
        position: Position,
        radius: f64,
        target_radius: f64,
        alpha: f64,
        life: u32,
        max_life: u32,
    },
}

impl Effect {
    /// Remaining lifetime in ticks.
    pub fn life(&self) -> u32 {
        match self {
            Effect::Particle { life, .. }
            | Effect::FloatingText { life, .. }
            | Effect::ExplosionRing { life, .. } => *life,
        }
    }
}
