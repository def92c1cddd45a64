//! Enemy path-following and breach detection.

use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use rampart_core::components::{Enemy, PathProgress};
use rampart_core::constants::{BREACH_PARTICLES, ENEMY_PULSE_RATE};
use rampart_core::events::AudioEvent;
use rampart_core::types::Position;

use crate::path::Path;
use crate::session::{Outbox, SessionState};
use crate::systems::effects::EffectLedger;

/// Outcome of advancing one enemy by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Moved(Position),
    /// Reached the end of the final segment.
    Breached,
}

/// Advance `progress` by `speed` along `path`. Reaching a segment's end resets
/// progress to 0 on the next segment; leaving the last segment is a breach.
pub fn advance_along(path: &Path, progress: &mut PathProgress, speed: f64) -> Step {
    progress.progress += speed;
    if progress.progress >= path.segment_length(progress.index) {
        progress.progress = 0.0;
        progress.index += 1;
        if progress.index >= path.segment_count() {
            return Step::Breached;
        }
    }
    Step::Moved(path.point_at(progress.index, progress.progress))
}

/// Move every enemy one tick. Breaching enemies cost a life each and are
/// removed without reward. Returns the number of breaches.
pub fn run(
    world: &mut World,
    path: &Path,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    effects: &mut EffectLedger,
    outbox: &mut Outbox,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    despawn_buffer.clear();

    for (entity, (enemy, progress, pos)) in
        world.query_mut::<(&mut Enemy, &mut PathProgress, &mut Position)>()
    {
        enemy.pulse = (enemy.pulse + ENEMY_PULSE_RATE) % std::f64::consts::TAU;
        match advance_along(path, progress, enemy.speed) {
            Step::Moved(next) => *pos = next,
            Step::Breached => despawn_buffer.push(entity),
        }
    }

    let mut breaches = 0;
    for entity in despawn_buffer.drain(..) {
        let Ok((enemy, _)) = world.remove::<(Enemy, PathProgress)>(entity) else {
            continue;
        };
        let _ = world.despawn(entity);
        breaches += 1;

        let lives_remaining = session.lose_life();
        debug!(
            "{:?} #{} breached, {} lives left",
            enemy.kind, enemy.serial, lives_remaining
        );

        let exit = path.waypoints()[path.waypoints().len() - 1];
        effects.burst(rng, exit, "#ff1744", BREACH_PARTICLES);
        effects.floating_text(exit, "-1 life", "#ff1744");
        outbox.emit(AudioEvent::Breach { lives_remaining });
    }
    breaches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_leg_path() -> Path {
        Path::new(vec![
            Position::new(0.0, 0.0),
            Position::new(10.0, 0.0),
            Position::new(10.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_interpolates_within_segment() {
        let path = two_leg_path();
        let mut progress = PathProgress::default();
        let step = advance_along(&path, &mut progress, 4.0);
        assert_eq!(step, Step::Moved(Position::new(4.0, 0.0)));
        assert_eq!(progress.index, 0);
    }

    #[test]
    fn test_segment_end_resets_progress() {
        let path = two_leg_path();
        let mut progress = PathProgress {
            index: 0,
            progress: 8.0,
        };
        // Overshoot of 1 unit is dropped, not carried.
        let step = advance_along(&path, &mut progress, 3.0);
        assert_eq!(progress.index, 1);
        assert_eq!(progress.progress, 0.0);
        assert_eq!(step, Step::Moved(Position::new(10.0, 0.0)));
    }

    #[test]
    fn test_last_segment_breaches() {
        let path = two_leg_path();
        let mut progress = PathProgress {
            index: 1,
            progress: 9.5,
        };
        assert_eq!(advance_along(&path, &mut progress, 1.0), Step::Breached);
    }

    #[test]
    fn test_run_counts_and_removes_breaching_enemies() {
        use rampart_core::enums::EnemyKind;
        use rand::SeedableRng;

        let path = two_leg_path();
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = SessionState::new(0, 5);
        let mut effects = EffectLedger::default();
        let mut outbox = Outbox::default();
        let mut buffer = Vec::new();

        let near_exit = PathProgress {
            index: 1,
            progress: 9.5,
        };
        for serial in 0..2 {
            let e = crate::world_setup::spawn_enemy(&mut world, &path, EnemyKind::Basic, 1, serial);
            *world.get::<&mut PathProgress>(e).unwrap() = near_exit;
        }
        let walker = crate::world_setup::spawn_enemy(&mut world, &path, EnemyKind::Basic, 1, 2);

        let breaches = run(
            &mut world,
            &path,
            &mut rng,
            &mut session,
            &mut effects,
            &mut outbox,
            &mut buffer,
        );
        assert_eq!(breaches, 2);
        assert_eq!(session.lives, 3);
        assert_eq!(world.query::<&Enemy>().iter().count(), 1);
        assert!(world.contains(walker));

        let quiet = run(
            &mut world,
            &path,
            &mut rng,
            &mut session,
            &mut effects,
            &mut outbox,
            &mut buffer,
        );
        assert_eq!(quiet, 0);
        assert_eq!(session.lives, 3);
    }
}
