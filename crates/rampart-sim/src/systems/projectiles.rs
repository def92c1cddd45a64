//! Projectile kinematics and impact resolution.
//!
//! Projectiles home on their target's current position. A projectile whose
//! target is gone is removed without dealing damage.

use hecs::{Entity, World};

use rampart_core::components::{Enemy, Projectile};
use rampart_core::constants::*;
use rampart_core::enums::ProjectileKind;
use rampart_core::events::AudioEvent;
use rampart_core::types::Position;

use crate::systems::damage::{self, DamageContext, DamageOutcome};
use crate::target::{self, Target};

/// Speed after the close-range boost: up to `PROJECTILE_MAX_BOOST` extra at
/// zero distance, none at `PROJECTILE_BOOST_RANGE` or beyond.
pub fn boosted_speed(base: f64, distance: f64) -> f64 {
    let closeness = 1.0 - distance.min(PROJECTILE_BOOST_RANGE) / PROJECTILE_BOOST_RANGE;
    base * (1.0 + PROJECTILE_MAX_BOOST * closeness)
}

/// Splash damage at `distance` from the impact point. Zero beyond `radius`.
pub fn splash_damage(damage: u32, distance: f64, radius: f64, falloff: f64) -> u32 {
    if distance > radius || radius <= 0.0 {
        return 0;
    }
    let scaled = damage as f64 * (1.0 - (distance / radius) * falloff);
    scaled.floor().max(0.0) as u32
}

/// Advance every projectile one tick and resolve impacts.
pub fn run(world: &mut World, ctx: &mut DamageContext<'_>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let in_flight: Vec<(Entity, Target)> = world
        .query::<(&Projectile, &Target)>()
        .iter()
        .map(|(entity, (_, link))| (entity, *link))
        .collect();

    for (entity, link) in in_flight {
        let aim = link.0.and_then(|enemy| target::resolve(world, enemy).map(|p| (enemy, p)));
        let Some((enemy, aim_point)) = aim else {
            despawn_buffer.push(entity);
            continue;
        };

        let (position, speed) = match world.query_one_mut::<(&Position, &Projectile)>(entity) {
            Ok((pos, projectile)) => (*pos, projectile.speed),
            Err(_) => continue,
        };

        let distance = position.distance_to(&aim_point);
        if distance < PROJECTILE_HIT_RADIUS {
            if let Ok(projectile) = world.get::<&Projectile>(entity).map(|p| (*p).clone()) {
                resolve_impact(world, &projectile, enemy, aim_point, ctx);
            }
            despawn_buffer.push(entity);
            continue;
        }

        let next = position.step_toward(&aim_point, boosted_speed(speed, distance));
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = next;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn resolve_impact(
    world: &mut World,
    projectile: &Projectile,
    enemy: Entity,
    impact: Position,
    ctx: &mut DamageContext<'_>,
) {
    match projectile.kind {
        ProjectileKind::Standard => {
            damage::apply_damage(world, enemy, projectile.damage, ctx);
            ctx.effects
                .burst(ctx.rng, impact, &projectile.color, IMPACT_PARTICLES);
            ctx.outbox.emit(AudioEvent::Impact {
                kind: projectile.source,
            });
        }
        ProjectileKind::Bomber {
            explosion_radius,
            falloff,
        } => {
            let mut enemies_hit = 0;
            if damage::apply_damage(world, enemy, projectile.damage, ctx) != DamageOutcome::NoTarget
            {
                enemies_hit += 1;
            }

            let splashed: Vec<(Entity, f64)> = world
                .query::<(&Enemy, &Position)>()
                .iter()
                .filter(|(other, _)| *other != enemy)
                .map(|(other, (_, pos))| (other, impact.distance_to(pos)))
                .filter(|(_, distance)| *distance <= explosion_radius)
                .collect();

            for (other, distance) in splashed {
                let amount = splash_damage(projectile.damage, distance, explosion_radius, falloff);
                if amount == 0 {
                    continue;
                }
                if damage::apply_damage(world, other, amount, ctx) != DamageOutcome::NoTarget {
                    enemies_hit += 1;
                }
            }

            ctx.effects.explosion_ring(impact, explosion_radius);
            ctx.effects
                .burst(ctx.rng, impact, &projectile.color, IMPACT_PARTICLES * 2);
            ctx.outbox.emit(AudioEvent::Explosion { enemies_hit });
        }
    }
}
