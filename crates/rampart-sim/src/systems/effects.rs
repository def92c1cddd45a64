//! Effect ledger: append/expire store for transient visuals.
//!
//! Every system may append; only `age` mutates existing entries. The
//! presentation layer reads the ledger through the snapshot.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rampart_core::constants::*;
use rampart_core::effects::Effect;
use rampart_core::types::Position;

#[derive(Debug, Default)]
pub struct EffectLedger {
    effects: Vec<Effect>,
}

impl EffectLedger {
    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Scatter `count` particles from `at` in random directions.
    pub fn burst(&mut self, rng: &mut ChaCha8Rng, at: Position, color: &str, count: usize) {
        for _ in 0..count {
            let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let speed: f64 = rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
            let life: u32 = rng.gen_range(PARTICLE_LIFE_MIN..=PARTICLE_LIFE_MAX);
            let radius: f64 = rng.gen_range(1.5..4.0);
            let velocity = DVec2::from_angle(angle) * speed;
            self.push(Effect::Particle {
                position: at,
                vx: velocity.x,
                vy: velocity.y,
                radius,
                color: color.to_string(),
                alpha: 1.0,
                life,
                max_life: life,
            });
        }
    }

    pub fn floating_text(&mut self, at: Position, text: impl Into<String>, color: &str) {
        self.push(Effect::FloatingText {
            position: at,
            text: text.into(),
            color: color.to_string(),
            drift: TEXT_DRIFT,
            alpha: 1.0,
            life: TEXT_LIFE,
            max_life: TEXT_LIFE,
        });
    }

    pub fn explosion_ring(&mut self, at: Position, target_radius: f64) {
        self.push(Effect::ExplosionRing {
            position: at,
            radius: 0.0,
            target_radius,
            alpha: 1.0,
            life: RING_LIFE,
            max_life: RING_LIFE,
        });
    }

    /// Advance every effect by one tick and drop the expired ones.
    pub fn age(&mut self) {
        for effect in &mut self.effects {
            match effect {
                Effect::Particle {
                    position,
                    vx,
                    vy,
                    alpha,
                    life,
                    max_life,
                    ..
                } => {
                    *position = position.offset(*vx, *vy);
                    *vx *= PARTICLE_DRAG;
                    *vy *= PARTICLE_DRAG;
                    *life = life.saturating_sub(1);
                    *alpha = fade(*life, *max_life);
                }
                Effect::FloatingText {
                    position,
                    drift,
                    alpha,
                    life,
                    max_life,
                    ..
                } => {
                    *position = position.offset(0.0, -*drift);
                    *life = life.saturating_sub(1);
                    *alpha = fade(*life, *max_life);
                }
                Effect::ExplosionRing {
                    radius,
                    target_radius,
                    alpha,
                    life,
                    max_life,
                    ..
                } => {
                    *life = life.saturating_sub(1);
                    *alpha = fade(*life, *max_life);
                    *radius = *target_radius * (1.0 - *alpha);
                }
            }
        }
        self.effects.retain(|effect| effect.life() > 0);
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

fn fade(life: u32, max_life: u32) -> f64 {
    if max_life == 0 {
        0.0
    } else {
        life as f64 / max_life as f64
    }
}
