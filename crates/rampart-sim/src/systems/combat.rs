//! Combat system: per-tower target acquisition and firing.

use hecs::{Entity, World};
use rand::Rng;

use rampart_core::components::{Enemy, Health, Tower};
use rampart_core::constants::TIME_EPSILON_MS;
use rampart_core::events::AudioEvent;
use rampart_core::specs::SpecialAbility;
use rampart_core::types::Position;

use crate::systems::damage::{self, DamageContext};
use crate::target::Target;
use crate::world_setup;

/// A live enemy as seen by the targeting scan.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub entity: Entity,
    pub serial: u64,
    pub position: Position,
}

/// Pick the nearest candidate strictly inside `range`. On equal distance the
/// earlier candidate wins, so callers pass candidates in spawn order.
pub fn acquire_target(
    origin: Position,
    range: f64,
    candidates: impl IntoIterator<Item = Candidate>,
) -> Option<Candidate> {
    let mut best: Option<(f64, Candidate)> = None;
    for candidate in candidates {
        let distance = origin.distance_to(&candidate.position);
        if distance >= range {
            continue;
        }
        match best {
            Some((best_distance, _)) if distance >= best_distance => {}
            _ => best = Some((distance, candidate)),
        }
    }
    best.map(|(_, candidate)| candidate)
}

/// Live enemies ordered by spawn serial.
fn collect_candidates(world: &World) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.current > 0)
        .map(|(entity, (enemy, pos, _))| Candidate {
            entity,
            serial: enemy.serial,
            position: *pos,
        })
        .collect();
    candidates.sort_by_key(|c| c.serial);
    candidates
}

/// Whether a tower that last fired at `last_shot_ms` may fire again at `now_ms`.
/// A tower that has never fired is always ready.
pub fn cooldown_ready(last_shot_ms: Option<f64>, fire_rate: f64, now_ms: f64) -> bool {
    match last_shot_ms {
        Some(last) => now_ms - last >= 1000.0 / fire_rate - TIME_EPSILON_MS,
        None => true,
    }
}

/// Run one combat pass at simulation time `now_ms`.
pub fn run(world: &mut World, ctx: &mut DamageContext<'_>, now_ms: f64) {
    let candidates = collect_candidates(world);
    let towers: Vec<(Entity, Position)> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    for (tower_entity, tower_pos) in towers {
        let tower = match world.get::<&Tower>(tower_entity) {
            Ok(t) => (*t).clone(),
            Err(_) => continue,
        };

        if !cooldown_ready(tower.last_shot_ms, tower.fire_rate, now_ms) {
            continue;
        }

        // Enemies defeated earlier in this pass are gone from the world.
        let live = candidates
            .iter()
            .copied()
            .filter(|c| world.contains(c.entity));
        let Some(target) = acquire_target(tower_pos, tower.range, live) else {
            if let Ok(mut link) = world.get::<&mut Target>(tower_entity) {
                *link = Target::none();
            }
            continue;
        };

        let aim_angle = tower_pos.angle_to(&target.position);
        if let Ok(mut t) = world.get::<&mut Tower>(tower_entity) {
            t.aim_angle = aim_angle;
            t.last_shot_ms = Some(now_ms);
        }
        if let Ok(mut link) = world.get::<&mut Target>(tower_entity) {
            *link = Target::to(target.entity);
        }
        ctx.outbox.emit(AudioEvent::ShotFired { kind: tower.kind });

        match tower.special {
            Some(SpecialAbility::Critical { chance, multiplier }) => {
                let mut amount = tower.damage;
                let roll: f64 = ctx.rng.gen();
                if roll < chance {
                    amount = (tower.damage as f64 * multiplier).floor() as u32;
                    ctx.outbox.emit(AudioEvent::CriticalHit { damage: amount });
                    ctx.effects
                        .floating_text(target.position, "CRIT!", "#ff1744");
                }
                damage::apply_damage(world, target.entity, amount, ctx);
            }
            _ => {
                world_setup::spawn_projectile(world, &tower, tower_pos, target.entity);
            }
        }
    }
}
