//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! so a host UI drives it one `tick()` per frame and tests drive it directly.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use rampart_core::commands::PlayerCommand;
use rampart_core::constants::{STARTING_LIVES, STARTING_MONEY};
use rampart_core::enums::{AlertLevel, GamePhase, TowerKind};
use rampart_core::error::{ConfigError, PlacementError};
use rampart_core::events::AudioEvent;
use rampart_core::state::{GameStateSnapshot, GameSummary};
use rampart_core::types::{Position, SimTime};

use crate::path::Path;
use crate::session::{Outbox, SessionState};
use crate::systems;
use crate::systems::damage::DamageContext;
use crate::systems::effects::EffectLedger;
use crate::systems::snapshot::SnapshotSource;
use crate::systems::wave_director::WaveDirector;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub starting_money: u32,
    pub starting_lives: u32,
    /// Waypoints enemies follow, start to exit.
    pub path: Vec<Position>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_money: STARTING_MONEY,
            starting_lives: STARTING_LIVES,
            path: Path::default_waypoints(),
        }
    }
}

impl SimConfig {
    /// Parse a JSON config. Missing fields take their defaults; the path is
    /// validated before the config is returned.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        Path::new(config.path.clone())?;
        Ok(config)
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    paused: bool,
    config: SimConfig,
    path: Path,
    rng: ChaCha8Rng,
    session: SessionState,
    director: WaveDirector,
    effects: EffectLedger,
    outbox: Outbox,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    summary: Option<GameSummary>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let path = Path::new(config.path.clone())?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            paused: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            session: SessionState::new(config.starting_money, config.starting_lives),
            director: WaveDirector::default(),
            effects: EffectLedger::default(),
            outbox: Outbox::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            summary: None,
            path,
            config,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.is_running() {
            self.run_systems();
            if self.phase != GamePhase::GameOver {
                self.time.advance();
            }
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending audio events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let audio_events = self.outbox.take_audio_events();
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotSource {
                time: &self.time,
                phase: self.phase,
                paused: self.paused,
                session: &self.session,
                director: &self.director,
                effects: &self.effects,
                outbox: &self.outbox,
                summary: self.summary.as_ref(),
            },
            audio_events,
        )
    }

    /// Place a tower immediately and report why it was refused, if it was.
    ///
    /// Towers can be built while a session is in progress, paused or not.
    pub fn request_placement(
        &mut self,
        kind: TowerKind,
        position: Position,
    ) -> Result<Entity, PlacementError> {
        if !self.phase.is_in_session() {
            return Err(PlacementError::NotAccepting);
        }
        systems::placement::place(
            &mut self.world,
            &self.path,
            &mut self.session,
            &mut self.outbox,
            self.director.wave,
            kind,
            position,
        )
    }

    /// Arm a tower kind for the next placement. Locked kinds are refused.
    pub fn select_tower_kind(&mut self, kind: TowerKind) -> Result<(), PlacementError> {
        if !systems::placement::is_unlocked(kind, self.director.wave) {
            let unlock_wave = rampart_core::specs::tower_spec(kind).unlock_wave;
            return Err(PlacementError::Locked { kind, unlock_wave });
        }
        self.session.selected_kind = Some(kind);
        Ok(())
    }

    /// Disarm the pending tower kind.
    pub fn clear_selection(&mut self) {
        self.session.selected_kind = None;
    }

    /// Select the tower in the grid cell containing `position`. An empty
    /// cell clears the selection.
    pub fn select_tower(&mut self, position: Position) -> Option<Entity> {
        self.session.selected_tower = systems::placement::tower_at(&self.world, position);
        self.session.selected_tower
    }

    /// Leave the main menu and begin the preparation countdown. A finished
    /// session is reset first.
    pub fn start_session(&mut self) {
        match self.phase {
            GamePhase::MainMenu => {}
            GamePhase::GameOver => self.reset_session(),
            _ => return,
        }
        self.phase = GamePhase::Preparation;
        self.director.begin_preparation();
        info!(
            "session started: seed {}, ${}, {} lives",
            self.config.seed, self.session.money, self.session.lives
        );
        self.outbox
            .alert(AlertLevel::Info, "Prepare your defenses!", self.time.tick);
    }

    /// Discard the session: every entity, timer and counter goes back to its
    /// starting value and the engine returns to the main menu.
    pub fn reset_session(&mut self) {
        self.world.clear();
        self.director = WaveDirector::default();
        self.session = SessionState::new(self.config.starting_money, self.config.starting_lives);
        self.effects.clear();
        self.outbox.clear();
        self.despawn_buffer.clear();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.time = SimTime::default();
        self.phase = GamePhase::MainMenu;
        self.paused = false;
        self.summary = None;
        info!("session reset");
    }

    /// Freeze the simulation. Only meaningful during a session.
    pub fn pause(&mut self) {
        if self.phase.is_in_session() {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn effects(&self) -> &EffectLedger {
        &self.effects
    }

    /// End-of-game summary, present once the game is over.
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    fn is_running(&self) -> bool {
        self.phase.is_in_session() && !self.paused
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => self.start_session(),
            PlayerCommand::ResetSession => self.reset_session(),
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Resume => self.resume(),
            PlayerCommand::SelectTowerKind { kind } => {
                if let Err(err) = self.select_tower_kind(kind) {
                    self.reject(err);
                }
            }
            PlayerCommand::ClearSelection => self.clear_selection(),
            PlayerCommand::PlaceTower { kind, position } => {
                let result = kind
                    .or(self.session.selected_kind)
                    .ok_or(PlacementError::NoSelection)
                    .and_then(|kind| self.request_placement(kind, position));
                if let Err(err) = result {
                    self.reject(err);
                }
            }
            PlayerCommand::SelectTower { position } => {
                self.select_tower(position);
            }
        }
    }

    fn reject(&mut self, err: PlacementError) {
        warn!("command rejected: {err}");
        self.outbox
            .alert(AlertLevel::Warning, err.to_string(), self.time.tick);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Phase timers and spawn schedule
        self.director.advance(
            &mut self.world,
            &self.path,
            &mut self.rng,
            &mut self.session,
            &mut self.outbox,
            &mut self.phase,
            &self.time,
        );
        // 2. Wave completion
        self.director.check_completion(
            &self.world,
            &mut self.outbox,
            &mut self.phase,
            self.time.tick,
        );
        // 3. Enemy movement and breaches
        let breaches = systems::movement::run(
            &mut self.world,
            &self.path,
            &mut self.rng,
            &mut self.session,
            &mut self.effects,
            &mut self.outbox,
            &mut self.despawn_buffer,
        );
        // Lives only drop on a breach, so defeat is only possible after one.
        if breaches > 0 && self.session.is_defeated() {
            self.game_over();
            return;
        }

        let mut ctx = DamageContext {
            session: &mut self.session,
            effects: &mut self.effects,
            outbox: &mut self.outbox,
            rng: &mut self.rng,
        };
        // 4. Tower targeting and firing
        systems::combat::run(&mut self.world, &mut ctx, self.time.elapsed_ms);
        // 5. Projectile flight and impacts
        systems::projectiles::run(&mut self.world, &mut ctx, &mut self.despawn_buffer);
        // 6. Effect aging
        self.effects.age();
    }

    fn game_over(&mut self) {
        self.director.cancel();
        self.phase = GamePhase::GameOver;
        self.paused = false;

        let score = &self.session.score;
        let summary = GameSummary {
            wave_reached: self.director.wave,
            enemies_defeated: score.enemies_defeated,
            towers_built: score.towers_built,
            money_earned: score.money_earned,
            ticks_survived: self.time.tick,
        };
        info!(
            "game over at wave {}: {} defeated, {} towers built",
            summary.wave_reached, summary.enemies_defeated, summary.towers_built
        );
        self.outbox.emit(AudioEvent::GameOver {
            summary: summary.clone(),
        });
        self.outbox.alert(
            AlertLevel::Critical,
            format!("Defenses overrun at wave {}!", summary.wave_reached),
            self.time.tick,
        );
        self.summary = Some(summary);
    }

    /// Spawn an enemy partway along the path with fixed health (for tests).
    #[cfg(test)]
    pub(crate) fn spawn_test_enemy(
        &mut self,
        kind: rampart_core::enums::EnemyKind,
        progress: rampart_core::components::PathProgress,
        health: u32,
    ) -> Entity {
        use rampart_core::components::{Health, PathProgress};

        let serial = self.session.next_serial();
        let entity = crate::world_setup::spawn_enemy(
            &mut self.world,
            &self.path,
            kind,
            self.director.wave,
            serial,
        );
        let position = self.path.point_at(progress.index, progress.progress);
        if let Ok((pos, path_progress, hp)) =
            self.world
                .query_one_mut::<(&mut Position, &mut PathProgress, &mut Health)>(entity)
        {
            *pos = position;
            *path_progress = progress;
            *hp = Health {
                current: health,
                max: health,
            };
        }
        entity
    }

    /// Place a tower directly, skipping cost, unlock and spacing checks.
    #[cfg(test)]
    pub(crate) fn spawn_test_tower(&mut self, kind: TowerKind, position: Position) -> Entity {
        crate::world_setup::spawn_tower(&mut self.world, kind, position)
    }

    /// Mutable world access (for tests).
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable session access (for tests).
    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }
}
