//! Damage application and defeat processing, shared by every damage path.

use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use rampart_core::components::{Enemy, Health};
use rampart_core::constants::DEFEAT_PARTICLES;
use rampart_core::events::AudioEvent;
use rampart_core::types::Position;

use crate::session::{Outbox, SessionState};
use crate::systems::effects::EffectLedger;

/// Result of applying damage to an enemy handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The handle was stale; nothing happened.
    NoTarget,
    /// Health dropped but the enemy survives.
    Damaged { remaining: u32 },
    /// Health reached zero; reward granted and the enemy removed.
    Defeated { reward: u32 },
}

/// Mutable context every damage path needs.
pub struct DamageContext<'a> {
    pub session: &'a mut SessionState,
    pub effects: &'a mut EffectLedger,
    pub outbox: &'a mut Outbox,
    pub rng: &'a mut ChaCha8Rng,
}

/// Apply `amount` damage to `enemy`. Stale handles are ignored, so an enemy is
/// defeated and rewarded at most once.
pub fn apply_damage(
    world: &mut World,
    enemy: Entity,
    amount: u32,
    ctx: &mut DamageContext<'_>,
) -> DamageOutcome {
    let remaining = {
        let Ok(mut health) = world.get::<&mut Health>(enemy) else {
            return DamageOutcome::NoTarget;
        };
        health.current = health.current.saturating_sub(amount);
        health.current
    };

    if remaining > 0 {
        return DamageOutcome::Damaged { remaining };
    }
    defeat(world, enemy, ctx)
}

fn defeat(world: &mut World, enemy: Entity, ctx: &mut DamageContext<'_>) -> DamageOutcome {
    let Ok((info, position)) = world.remove::<(Enemy, Position)>(enemy) else {
        return DamageOutcome::NoTarget;
    };
    let _ = world.despawn(enemy);

    ctx.session.grant(info.reward);
    ctx.session.score.enemies_defeated += 1;
    debug!(
        "{:?} #{} defeated, reward {}",
        info.kind, info.serial, info.reward
    );

    ctx.effects
        .burst(ctx.rng, position, &info.color, DEFEAT_PARTICLES);
    ctx.effects
        .floating_text(position, format!("+${}", info.reward), "#ffd54f");
    ctx.outbox.emit(AudioEvent::EnemyDefeated {
        kind: info.kind,
        reward: info.reward,
    });

    DamageOutcome::Defeated {
        reward: info.reward,
    }
}
