//! Per-session counters and the per-tick output queues.
//!
//! Owned by `SimulationEngine`, not stored in the ECS world.

use hecs::Entity;

use rampart_core::constants::MAX_ALERTS;
use rampart_core::enums::{AlertLevel, TowerKind};
use rampart_core::events::{Alert, AudioEvent};
use rampart_core::state::ScoreView;

/// Mutable session state. Rebuilt wholesale on reset.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub money: u32,
    pub lives: u32,
    pub score: ScoreState,
    /// Tower kind armed for the next placement.
    pub selected_kind: Option<TowerKind>,
    /// Placed tower selected for inspection.
    pub selected_tower: Option<Entity>,
    next_enemy_serial: u64,
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_defeated: u32,
    pub breaches: u32,
    pub towers_built: u32,
    pub money_earned: u32,
}

impl SessionState {
    pub fn new(money: u32, lives: u32) -> Self {
        Self {
            money,
            lives,
            score: ScoreState::default(),
            selected_kind: None,
            selected_tower: None,
            next_enemy_serial: 0,
        }
    }

    /// Add money from a reward or bonus.
    pub fn grant(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
        self.score.money_earned = self.score.money_earned.saturating_add(amount);
    }

    /// Deduct `amount` if affordable. Returns whether it was spent.
    pub fn spend(&mut self, amount: u32) -> bool {
        match self.money.checked_sub(amount) {
            Some(rest) => {
                self.money = rest;
                true
            }
            None => false,
        }
    }

    /// Remove one life. Returns the lives left.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.score.breaches += 1;
        self.lives
    }

    pub fn is_defeated(&self) -> bool {
        self.lives == 0
    }

    /// Hand out the next enemy spawn serial.
    pub fn next_serial(&mut self) -> u64 {
        let serial = self.next_enemy_serial;
        self.next_enemy_serial += 1;
        serial
    }

    pub fn score_view(&self) -> ScoreView {
        ScoreView {
            enemies_defeated: self.score.enemies_defeated,
            breaches: self.score.breaches,
            towers_built: self.score.towers_built,
            money_earned: self.score.money_earned,
        }
    }
}

/// Audio events for the current tick plus a rolling window of alerts.
#[derive(Debug, Default)]
pub struct Outbox {
    audio_events: Vec<AudioEvent>,
    alerts: Vec<Alert>,
}

impl Outbox {
    pub fn emit(&mut self, event: AudioEvent) {
        self.audio_events.push(event);
    }

    /// Push an alert, dropping the oldest beyond `MAX_ALERTS`.
    pub fn alert(&mut self, level: AlertLevel, message: impl Into<String>, tick: u64) {
        self.alerts.push(Alert {
            level,
            message: message.into(),
            tick,
        });
        if self.alerts.len() > MAX_ALERTS {
            let excess = self.alerts.len() - MAX_ALERTS;
            self.alerts.drain(..excess);
        }
    }

    /// Drain this tick's audio events.
    pub fn take_audio_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.audio_events)
    }

    pub fn audio_events(&self) -> &[AudioEvent] {
        &self.audio_events
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn clear(&mut self) {
        self.audio_events.clear();
        self.alerts.clear();
    }
}
