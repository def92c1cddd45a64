//! Wave director: wave composition, spawn pacing, completion and the
//! between-wave timers.
//!
//! Phase transitions run off one explicit timer advanced by the engine each
//! tick, so a simulation step never observes a half-applied transition.

use hecs::World;
use log::{debug, info};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rampart_core::components::Enemy;
use rampart_core::constants::*;
use rampart_core::enums::{AlertLevel, EnemyKind, GamePhase, TimerKind};
use rampart_core::events::AudioEvent;
use rampart_core::state::CountdownView;
use rampart_core::types::SimTime;

use crate::path::Path;
use crate::session::{Outbox, SessionState};
use crate::world_setup;

/// Health multiplier for `wave`. Monotonically non-decreasing.
pub fn difficulty_factor(wave: u32) -> f64 {
    let wave = wave.max(1);
    let mut factor = 1.0 + (wave - 1) as f64 * DIFFICULTY_PER_WAVE;
    if wave > DIFFICULTY_LOG_THRESHOLD {
        factor += ((wave - (DIFFICULTY_LOG_THRESHOLD - 1)) as f64).log10() * DIFFICULTY_LOG_WEIGHT;
    }
    factor
}

/// Number of enemies in `wave`.
pub fn enemy_count(wave: u32) -> u32 {
    let wave = wave.max(1);
    (WAVE_BASE_ENEMIES * (1.0 + (wave - 1) as f64 * WAVE_COUNT_GROWTH)).floor() as u32
}

/// Milliseconds between spawns in `wave`.
pub fn spawn_interval_ms(wave: u32) -> f64 {
    let wave = wave.max(1);
    (SPAWN_INTERVAL_BASE_MS - (wave - 1) as f64 * SPAWN_INTERVAL_STEP_MS).max(SPAWN_INTERVAL_MIN_MS)
}

/// Base health scaled by the wave's difficulty factor.
pub fn scaled_health(base: u32, wave: u32) -> u32 {
    (base as f64 * difficulty_factor(wave)).round().max(1.0) as u32
}

/// Base reward scaled linearly by wave, rounded up.
pub fn scaled_reward(base: u32, wave: u32) -> u32 {
    let wave = wave.max(1);
    let scaled = base as f64 * (1.0 + (wave - 1) as f64 * REWARD_PER_WAVE);
    // 10 * 1.1 is 11.000000000000002 in f64; don't let that round up to 12.
    (scaled - 1e-9).ceil() as u32
}

/// Money granted after clearing `wave`.
pub fn wave_bonus(wave: u32) -> u32 {
    (WAVE_BONUS_BASE + wave as f64 * WAVE_BONUS_PER_WAVE).floor() as u32
}

/// Map a uniform roll in `[0, 1)` to an enemy kind for `wave`.
pub fn enemy_kind_for_roll(wave: u32, roll: f64) -> EnemyKind {
    if wave % BOSS_WAVE_PERIOD == 0 {
        return if roll < 0.3 {
            EnemyKind::Boss
        } else {
            EnemyKind::Strong
        };
    }
    match wave {
        0..=2 => EnemyKind::Basic,
        3..=4 => {
            if roll < 0.7 {
                EnemyKind::Basic
            } else {
                EnemyKind::Fast
            }
        }
        5..=7 => {
            if roll < 0.5 {
                EnemyKind::Basic
            } else if roll < 0.8 {
                EnemyKind::Fast
            } else {
                EnemyKind::Strong
            }
        }
        _ => {
            if roll < 0.3 {
                EnemyKind::Basic
            } else if roll < 0.6 {
                EnemyKind::Fast
            } else if roll < 0.9 {
                EnemyKind::Strong
            } else {
                EnemyKind::Boss
            }
        }
    }
}

/// Spawn pacing for the current wave.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SpawnSchedule {
    /// Nothing pending.
    #[default]
    Idle,
    Running {
        remaining: u32,
        interval_ms: f64,
        until_next_ms: f64,
    },
}

/// A running phase timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTimer {
    pub kind: TimerKind,
    pub remaining_ms: f64,
    last_announced: Option<u32>,
}

impl PhaseTimer {
    fn new(kind: TimerKind, duration_ms: f64) -> Self {
        Self {
            kind,
            remaining_ms: duration_ms,
            last_announced: None,
        }
    }

    /// Whole seconds left, rounded up.
    pub fn remaining_secs(&self) -> u32 {
        (self.remaining_ms / 1000.0).ceil().max(0.0) as u32
    }
}

/// Wave counter, completion flags, spawn schedule and the phase timer.
#[derive(Debug, Clone)]
pub struct WaveDirector {
    pub wave: u32,
    /// Set by the first spawn of a wave, cleared on completion.
    pub wave_started: bool,
    pub wave_completed: bool,
    schedule: SpawnSchedule,
    timer: Option<PhaseTimer>,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self {
            wave: 1,
            wave_started: false,
            wave_completed: false,
            schedule: SpawnSchedule::Idle,
            timer: None,
        }
    }
}

impl WaveDirector {
    pub fn difficulty(&self) -> f64 {
        difficulty_factor(self.wave)
    }

    pub fn schedule(&self) -> SpawnSchedule {
        self.schedule
    }

    pub fn timer(&self) -> Option<PhaseTimer> {
        self.timer
    }

    /// True while the current wave still has enemies to spawn.
    pub fn spawns_pending(&self) -> bool {
        !matches!(self.schedule, SpawnSchedule::Idle)
    }

    pub fn countdown(&self) -> Option<CountdownView> {
        self.timer.map(|timer| CountdownView {
            kind: timer.kind,
            remaining_secs: timer.remaining_secs(),
        })
    }

    /// Arm the pre-wave-1 countdown.
    pub fn begin_preparation(&mut self) {
        self.timer = Some(PhaseTimer::new(TimerKind::Preparation, PREPARATION_MS));
    }

    /// Drop every pending timer and spawn.
    pub fn cancel(&mut self) {
        self.timer = None;
        self.schedule = SpawnSchedule::Idle;
    }

    fn start_wave(&mut self, phase: &mut GamePhase, outbox: &mut Outbox, tick: u64) {
        let count = enemy_count(self.wave);
        let interval_ms = spawn_interval_ms(self.wave);
        self.wave_completed = false;
        self.schedule = SpawnSchedule::Running {
            remaining: count,
            interval_ms,
            until_next_ms: interval_ms,
        };
        *phase = GamePhase::WaveActive;
        info!(
            "wave {} started: {} enemies every {:.0}ms",
            self.wave, count, interval_ms
        );
        outbox.emit(AudioEvent::WaveStarted { wave: self.wave });
        outbox.alert(
            AlertLevel::Info,
            format!("Wave {} incoming!", self.wave),
            tick,
        );
    }

    /// Advance the phase timer and the spawn schedule by one tick.
    #[allow(clippy::too_many_arguments)]
    pub fn advance(
        &mut self,
        world: &mut World,
        path: &Path,
        rng: &mut ChaCha8Rng,
        session: &mut SessionState,
        outbox: &mut Outbox,
        phase: &mut GamePhase,
        time: &SimTime,
    ) {
        self.advance_timer(session, outbox, phase, time);
        self.advance_spawns(world, path, rng, session, time);
    }

    fn advance_timer(
        &mut self,
        session: &mut SessionState,
        outbox: &mut Outbox,
        phase: &mut GamePhase,
        time: &SimTime,
    ) {
        let Some(mut timer) = self.timer.take() else {
            return;
        };
        timer.remaining_ms -= time.dt_ms();

        if timer.remaining_ms > TIME_EPSILON_MS {
            if matches!(
                timer.kind,
                TimerKind::Preparation | TimerKind::NextWaveCountdown
            ) {
                let secs = timer.remaining_secs();
                let due = secs % 2 == 0 || secs <= COUNTDOWN_FINAL_SECS;
                if secs > 0 && due && timer.last_announced != Some(secs) {
                    timer.last_announced = Some(secs);
                    let level = if secs <= COUNTDOWN_FINAL_SECS {
                        AlertLevel::Warning
                    } else {
                        AlertLevel::Info
                    };
                    outbox.alert(
                        level,
                        format!("Wave {} in {}...", self.wave_after(timer.kind), secs),
                        time.tick,
                    );
                }
            }
            self.timer = Some(timer);
            return;
        }

        match timer.kind {
            TimerKind::Preparation => {
                self.start_wave(phase, outbox, time.tick);
            }
            TimerKind::WaveBonus => {
                let bonus = wave_bonus(self.wave);
                session.grant(bonus);
                debug!("wave {} bonus paid: {}", self.wave, bonus);
                outbox.alert(
                    AlertLevel::Info,
                    format!("Wave bonus: +${bonus}"),
                    time.tick,
                );
                self.timer = Some(PhaseTimer::new(
                    TimerKind::NextWaveCountdown,
                    NEXT_WAVE_COUNTDOWN_MS,
                ));
            }
            TimerKind::NextWaveCountdown => {
                self.wave += 1;
                self.start_wave(phase, outbox, time.tick);
            }
        }
    }

    fn wave_after(&self, kind: TimerKind) -> u32 {
        match kind {
            TimerKind::NextWaveCountdown => self.wave + 1,
            _ => self.wave,
        }
    }

    fn advance_spawns(
        &mut self,
        world: &mut World,
        path: &Path,
        rng: &mut ChaCha8Rng,
        session: &mut SessionState,
        time: &SimTime,
    ) {
        let SpawnSchedule::Running {
            mut remaining,
            interval_ms,
            mut until_next_ms,
        } = self.schedule
        else {
            return;
        };

        until_next_ms -= time.dt_ms();
        while until_next_ms <= TIME_EPSILON_MS && remaining > 0 {
            let roll: f64 = rng.gen();
            let kind = enemy_kind_for_roll(self.wave, roll);
            let serial = session.next_serial();
            world_setup::spawn_enemy(world, path, kind, self.wave, serial);
            debug!("spawned {:?} #{} in wave {}", kind, serial, self.wave);
            self.wave_started = true;
            remaining -= 1;
            until_next_ms += interval_ms;
        }

        self.schedule = if remaining == 0 {
            SpawnSchedule::Idle
        } else {
            SpawnSchedule::Running {
                remaining,
                interval_ms,
                until_next_ms,
            }
        };
    }

    /// Detect wave completion: started, nothing pending, nothing alive.
    pub fn check_completion(
        &mut self,
        world: &World,
        outbox: &mut Outbox,
        phase: &mut GamePhase,
        tick: u64,
    ) -> bool {
        if !self.wave_started || self.wave_completed || self.spawns_pending() {
            return false;
        }
        let alive = world.query::<&Enemy>().iter().count();
        if alive > 0 {
            return false;
        }

        self.wave_started = false;
        self.wave_completed = true;
        self.timer = Some(PhaseTimer::new(TimerKind::WaveBonus, WAVE_BONUS_DELAY_MS));
        *phase = GamePhase::WaveComplete;

        let bonus = wave_bonus(self.wave);
        info!("wave {} complete, bonus {} pending", self.wave, bonus);
        outbox.emit(AudioEvent::WaveCompleted {
            wave: self.wave,
            bonus,
        });
        outbox.alert(
            AlertLevel::Info,
            format!("Wave {} complete!", self.wave),
            tick,
        );
        true
    }
}
