//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use rampart_core::components::*;
use rampart_core::enums::*;
use rampart_core::events::AudioEvent;
use rampart_core::specs::tower_spec;
use rampart_core::state::*;
use rampart_core::types::{Position, SimTime};

use crate::session::{Outbox, SessionState};
use crate::systems::effects::EffectLedger;
use crate::systems::placement::is_unlocked;
use crate::systems::wave_director::WaveDirector;
use crate::target::{self, Target};

/// Everything the snapshot reads besides the world.
pub struct SnapshotSource<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub paused: bool,
    pub session: &'a SessionState,
    pub director: &'a WaveDirector,
    pub effects: &'a EffectLedger,
    pub outbox: &'a Outbox,
    pub summary: Option<&'a GameSummary>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    source: SnapshotSource<'_>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let SnapshotSource {
        time,
        phase,
        paused,
        session,
        director,
        effects,
        outbox,
        summary,
    } = source;

    GameStateSnapshot {
        time: *time,
        phase,
        paused,
        session: SessionView {
            money: session.money,
            lives: session.lives,
            wave: director.wave,
            difficulty: director.difficulty(),
            wave_started: director.wave_started,
            wave_completed: director.wave_completed,
            preparing: phase == GamePhase::Preparation,
            countdown: director.countdown(),
        },
        towers: build_towers(world, session),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        effects: effects.effects().to_vec(),
        tower_kinds: build_tower_kinds(session, director.wave),
        selected_kind: session.selected_kind,
        alerts: outbox.alerts().to_vec(),
        audio_events,
        score: session.score_view(),
        summary: summary.cloned(),
    }
}

fn build_towers(world: &World, session: &SessionState) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &Position, &Target)>()
        .iter()
        .map(|(entity, (tower, pos, link))| TowerView {
            kind: tower.kind,
            position: *pos,
            range: tower.range,
            aim_angle: tower.aim_angle,
            target_serial: target::serial_of(world, *link),
            selected: session.selected_tower == Some(entity),
        })
        .collect();

    towers.sort_by(|a, b| {
        a.position
            .y
            .total_cmp(&b.position.y)
            .then(a.position.x.total_cmp(&b.position.x))
    });
    towers
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .map(|(_, (enemy, pos, health))| EnemyView {
            serial: enemy.serial,
            kind: enemy.kind,
            position: *pos,
            health: health.current,
            max_health: health.max,
            size: enemy.size,
            color: enemy.color.clone(),
            pulse: enemy.pulse,
        })
        .collect();

    enemies.sort_by_key(|e| e.serial);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            kind: projectile.kind,
            position: *pos,
            size: projectile.size,
            color: projectile.color.clone(),
        })
        .collect()
}

fn build_tower_kinds(session: &SessionState, wave: u32) -> Vec<TowerKindView> {
    TowerKind::ALL
        .iter()
        .map(|kind| {
            let spec = tower_spec(*kind);
            TowerKindView {
                kind: *kind,
                cost: spec.cost,
                unlock_wave: spec.unlock_wave,
                unlocked: is_unlocked(*kind, wave),
                affordable: session.money >= spec.cost,
            }
        })
        .collect()
}
