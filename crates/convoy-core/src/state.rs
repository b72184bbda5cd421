//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::UiEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u64,
    pub distance_traveled: f64,
    pub level: u32,
    pub convoy: ConvoyView,
    pub turret: TurretView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub scenery: Vec<SceneryView>,
    pub terrain: TerrainView,
    /// UI notifications produced this tick (drained, not cumulative).
    pub ui_events: Vec<UiEvent>,
}

/// Convoy position and status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvoyView {
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    /// Damage flash active this tick.
    pub flashing: bool,
}

/// Turret aim state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurretView {
    pub aim_point: Position,
    pub cooldown_remaining: f64,
}

/// A live enemy for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    /// Health as a fraction of maximum, for health bars.
    pub health_fraction: f64,
    pub yaw: f64,
    pub bob_offset: f64,
    pub scale: f64,
    pub flashing: bool,
}

/// A live projectile for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    /// Unit travel direction, for orienting the model and trail.
    pub direction: [f64; 3],
}

/// A scenery object for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneryView {
    pub kind: SceneryKind,
    pub position: Position,
    pub scale: f64,
    pub rotation: f64,
}

/// Ground/road tile ring state for the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerrainView {
    /// Z origin of each ground tile.
    pub ground_tiles_z: Vec<f64>,
    /// Z origin of each road tile.
    pub road_tiles_z: Vec<f64>,
    pub tile_length: f64,
    pub road_width: f64,
}
