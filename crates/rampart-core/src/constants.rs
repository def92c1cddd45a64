//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick.
pub const DT_MS: f64 = 1000.0 / TICK_RATE as f64;

/// Slack for comparing accumulated times against nominal durations (ms).
pub const TIME_EPSILON_MS: f64 = 1e-6;

// --- Playfield ---

/// Playfield width in world units.
pub const FIELD_WIDTH: f64 = 800.0;

/// Playfield height in world units.
pub const FIELD_HEIGHT: f64 = 600.0;

/// Placement grid cell size. Towers sit at cell centers.
pub const GRID_SIZE: f64 = 40.0;

/// Towers may not be placed closer than this to the field edge.
pub const BOUNDS_MARGIN: f64 = 20.0;

/// Minimum center-to-center distance between two towers.
pub const TOWER_CLEARANCE: f64 = 40.0;

/// Minimum distance between a tower and the path centerline.
pub const PATH_CLEARANCE: f64 = 35.0;

/// Sampling step along each path segment for the path clearance test.
pub const PATH_SAMPLE_STEP: f64 = 5.0;

/// Longest accepted path segment. Well beyond the field diagonal.
pub const MAX_SEGMENT_LENGTH: f64 = 10_000.0;

// --- Session ---

pub const STARTING_MONEY: u32 = 200;
pub const STARTING_LIVES: u32 = 20;

// --- Waves ---

/// Enemies in wave 1; later waves scale by `WAVE_COUNT_GROWTH` per wave.
pub const WAVE_BASE_ENEMIES: f64 = 8.0;
pub const WAVE_COUNT_GROWTH: f64 = 0.2;

/// Health scaling per wave.
pub const DIFFICULTY_PER_WAVE: f64 = 0.15;

/// Waves past this number add a logarithmic difficulty term.
pub const DIFFICULTY_LOG_THRESHOLD: u32 = 10;
pub const DIFFICULTY_LOG_WEIGHT: f64 = 0.5;

/// Reward scaling per wave.
pub const REWARD_PER_WAVE: f64 = 0.1;

/// Spawn interval for wave 1 (ms).
pub const SPAWN_INTERVAL_BASE_MS: f64 = 1200.0;
/// Spawn interval reduction per wave (ms).
pub const SPAWN_INTERVAL_STEP_MS: f64 = 50.0;
/// Spawn interval floor (ms).
pub const SPAWN_INTERVAL_MIN_MS: f64 = 300.0;

/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_PERIOD: u32 = 5;

/// Completion bonus: `WAVE_BONUS_BASE + wave * WAVE_BONUS_PER_WAVE`.
pub const WAVE_BONUS_BASE: f64 = 20.0;
pub const WAVE_BONUS_PER_WAVE: f64 = 5.0;

/// Delay between wave completion and the bonus payout (ms).
pub const WAVE_BONUS_DELAY_MS: f64 = 1000.0;

/// Countdown between waves (ms).
pub const NEXT_WAVE_COUNTDOWN_MS: f64 = 8000.0;

/// Countdown before wave 1 (ms).
pub const PREPARATION_MS: f64 = 5000.0;

/// Countdown narration announces every second at or below this value.
pub const COUNTDOWN_FINAL_SECS: u32 = 3;

// --- Projectiles ---

/// Distance at which a projectile impacts its aim point.
pub const PROJECTILE_HIT_RADIUS: f64 = 5.0;

/// Distance below which projectiles start to accelerate.
pub const PROJECTILE_BOOST_RANGE: f64 = 300.0;

/// Maximum speed bonus at zero distance (fraction of base speed).
pub const PROJECTILE_MAX_BOOST: f64 = 0.1;

// --- Enemies ---

/// Pulse animation phase increment per tick (radians).
pub const ENEMY_PULSE_RATE: f64 = 0.1;

// --- Effects ---

/// Particle velocity damping per tick.
pub const PARTICLE_DRAG: f64 = 0.95;

/// Particles emitted when an enemy is defeated.
pub const DEFEAT_PARTICLES: usize = 12;

/// Particles emitted on a breach.
pub const BREACH_PARTICLES: usize = 20;

/// Particles emitted on a projectile impact.
pub const IMPACT_PARTICLES: usize = 4;

/// Particle lifetime range (ticks).
pub const PARTICLE_LIFE_MIN: u32 = 20;
pub const PARTICLE_LIFE_MAX: u32 = 40;

/// Particle initial speed range (units/tick).
pub const PARTICLE_SPEED_MIN: f64 = 0.5;
pub const PARTICLE_SPEED_MAX: f64 = 3.0;

/// Floating text lifetime (ticks) and upward drift (units/tick).
pub const TEXT_LIFE: u32 = 60;
pub const TEXT_DRIFT: f64 = 0.5;

/// Explosion ring lifetime (ticks).
pub const RING_LIFE: u32 = 20;

// --- Alerts ---

/// Maximum alerts retained for the presentation layer.
pub const MAX_ALERTS: usize = 8;
