//! Entity spawn factories.
//!
//! Instances copy what they need from the immutable spec tables and add their
//! own runtime fields.

use hecs::{Entity, World};

use rampart_core::components::*;
use rampart_core::enums::*;
use rampart_core::specs::{enemy_spec, tower_spec, SpecialAbility};
use rampart_core::types::Position;

use crate::path::Path;
use crate::systems::wave_director::{scaled_health, scaled_reward};
use crate::target::Target;

/// Spawn a tower at a grid-aligned position.
pub fn spawn_tower(world: &mut World, kind: TowerKind, position: Position) -> Entity {
    let spec = tower_spec(kind);
    let tower = Tower {
        kind,
        damage: spec.damage,
        range: spec.range,
        fire_rate: spec.fire_rate,
        projectile_speed: spec.projectile_speed,
        projectile_size: spec.projectile_size,
        projectile_color: spec.projectile_color.to_string(),
        special: spec.special,
        last_shot_ms: None,
        aim_angle: 0.0,
    };
    world.spawn((tower, position, Target::none()))
}

/// Spawn an enemy at the path start, scaled for `wave`.
pub fn spawn_enemy(
    world: &mut World,
    path: &Path,
    kind: EnemyKind,
    wave: u32,
    serial: u64,
) -> Entity {
    let spec = enemy_spec(kind);
    let max_health = scaled_health(spec.health, wave);
    let enemy = Enemy {
        kind,
        serial,
        speed: spec.speed,
        reward: scaled_reward(spec.reward, wave),
        size: spec.size,
        color: spec.color.to_string(),
        pulse: 0.0,
    };
    world.spawn((
        enemy,
        path.start(),
        PathProgress::default(),
        Health {
            current: max_health,
            max: max_health,
        },
    ))
}

/// Spawn a projectile fired by `tower` at `target`.
pub fn spawn_projectile(
    world: &mut World,
    tower: &Tower,
    origin: Position,
    target: Entity,
) -> Entity {
    let kind = match tower.special {
        Some(SpecialAbility::Explosion { radius, falloff }) => ProjectileKind::Bomber {
            explosion_radius: radius,
            falloff,
        },
        _ => ProjectileKind::Standard,
    };
    let projectile = Projectile {
        kind,
        source: tower.kind,
        damage: tower.damage,
        speed: tower.projectile_speed,
        size: tower.projectile_size,
        color: tower.projectile_color.clone(),
    };
    world.spawn((projectile, origin, Target::to(target)))
}
