//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Convoy ---

/// Convoy forward speed (units/s).
pub const CONVOY_SPEED: f64 = 2.0;

/// Convoy starting and maximum health.
pub const CONVOY_MAX_HEALTH: f64 = 100.0;

/// Convoy collision radius (single truck).
pub const CONVOY_COLLISION_RADIUS: f64 = 3.0;

// --- Turret ---

/// Turret mount height above the convoy origin.
pub const TURRET_HEIGHT: f64 = 3.0;

/// Barrel length — projectiles spawn this far ahead of the turret.
pub const TURRET_BARREL_LENGTH: f64 = 2.0;

/// Minimum time between shots (seconds).
pub const FIRE_COOLDOWN_SECS: f64 = 0.2;

// --- Projectiles ---

/// Projectile speed (units/s).
pub const PROJECTILE_SPEED: f64 = 30.0;

/// Damage applied per projectile hit.
pub const PROJECTILE_DAMAGE: f64 = 10.0;

/// Projectile base collision radius; a hit registers within
/// this plus the enemy's own radius.
pub const PROJECTILE_HIT_RADIUS: f64 = 1.0;

/// Projectiles farther than this from the convoy are removed.
pub const PROJECTILE_DESPAWN_RANGE: f64 = 100.0;

// --- Enemy spawning ---

/// Inner radius of the spawn ring around the convoy.
pub const SPAWN_RING_INNER: f64 = 30.0;

/// Outer radius of the spawn ring around the convoy.
pub const SPAWN_RING_OUTER: f64 = 50.0;

/// Spawn interval at level 1 (seconds between spawns).
pub const BASE_SPAWN_INTERVAL_SECS: f64 = 2.0;

/// Spawn interval floor — never spawns faster than this.
pub const MIN_SPAWN_INTERVAL_SECS: f64 = 0.5;

/// Spawn interval reduction per difficulty level (seconds).
pub const SPAWN_INTERVAL_STEP_SECS: f64 = 0.1;

/// Live enemy cap at level 0; grows by ENEMIES_PER_LEVEL.
pub const BASE_MAX_ENEMIES: usize = 10;

/// Additional enemy cap per difficulty level.
pub const ENEMIES_PER_LEVEL: usize = 2;

/// Enemies farther than this from the convoy wander off (no score).
pub const ENEMY_DESPAWN_RANGE: f64 = 100.0;

// --- Enemy type probability scaling (per level, re-derived each draw) ---

/// Tank probability gain per level, capped at TANK_PROBABILITY_CAP.
pub const TANK_PROBABILITY_PER_LEVEL: f64 = 0.05;
pub const TANK_PROBABILITY_CAP: f64 = 0.5;

/// Fast probability gain per level, capped at FAST_PROBABILITY_CAP.
pub const FAST_PROBABILITY_PER_LEVEL: f64 = 0.03;
pub const FAST_PROBABILITY_CAP: f64 = 0.4;

/// Basic probability loss per level, floored at BASIC_PROBABILITY_FLOOR.
pub const BASIC_PROBABILITY_PER_LEVEL: f64 = 0.08;
pub const BASIC_PROBABILITY_FLOOR: f64 = 0.1;

// --- Difficulty ramp ---

/// Distance traveled between difficulty increases (units).
pub const DIFFICULTY_DISTANCE_INTERVAL: f64 = 500.0;

/// Stat escalation factor applied by set_difficulty.
pub const ESCALATION_FACTOR: f64 = 1.2;

/// Health escalates every Nth level.
pub const HEALTH_ESCALATION_MODULUS: u32 = 3;

/// Damage escalates every Nth level.
pub const DAMAGE_ESCALATION_MODULUS: u32 = 5;

/// Score value multiplier slope per level.
pub const SCORE_SCALE_PER_LEVEL: f64 = 0.1;

// --- Terrain streaming ---

/// Length of one ground/road tile along the travel axis.
pub const TILE_LENGTH: f64 = 1000.0;

/// Number of tiles in each ring (ground and road).
pub const TILE_COUNT: usize = 3;

/// Road width (units).
pub const ROAD_WIDTH: f64 = 12.0;

// --- Scenery streaming ---

/// Forward distance kept populated with scenery.
pub const SCENERY_RENDER_DISTANCE: f64 = 300.0;

/// Length of one generation chunk.
pub const SCENERY_GENERATION_DISTANCE: f64 = 100.0;

/// Scenery farther behind the convoy than this is removed.
pub const SCENERY_DESPAWN_DISTANCE: f64 = 50.0;

/// Initial back-fill starts this far behind the convoy.
pub const SCENERY_INITIAL_BACKFILL: f64 = 50.0;

/// Candidate count for the initial population.
pub const SCENERY_INITIAL_COUNT: usize = 50;

/// Candidate count per generation chunk.
pub const SCENERY_CHUNK_COUNT: usize = 10;

/// Scenery is placed within this lateral half-band of the centerline.
pub const SCENERY_LATERAL_HALF_BAND: f64 = 100.0;

/// Candidates closer than ROAD_WIDTH/2 + this to the centerline are
/// rejected and not re-rolled.
pub const SCENERY_ROAD_MARGIN: f64 = 5.0;

/// Kind selection thresholds on a uniform [0,1) draw:
/// below TREE → tree, below ROCK → rock, otherwise building.
pub const SCENERY_TREE_THRESHOLD: f64 = 0.5;
pub const SCENERY_ROCK_THRESHOLD: f64 = 0.8;

// --- Cosmetics ---

/// Enemy vertical bob amplitude (units).
pub const BOB_AMPLITUDE: f64 = 0.2;

/// Enemy vertical bob frequency (rad/s).
pub const BOB_FREQUENCY: f64 = 3.0;

/// Enemy yaw spin rate (rad/s).
pub const SPIN_RATE: f64 = 2.0;

/// Duration of the enemy damage flash (seconds).
pub const ENEMY_FLASH_SECS: f64 = 0.1;

/// Duration of the convoy damage flash (seconds).
pub const CONVOY_FLASH_SECS: f64 = 0.2;
