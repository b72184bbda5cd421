//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, SceneryKind};
use crate::types::Position;

/// The player's vehicle. Exactly one exists per session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Convoy {
    pub health: f64,
    pub max_health: f64,
    /// Forward speed along the travel axis (units/s).
    pub speed: f64,
    pub collision_radius: f64,
}

/// The aiming and firing component mounted on the convoy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Turret {
    /// Seconds until the next shot is allowed.
    pub cooldown_remaining: f64,
    /// World-space point the turret is aimed at (on the ground plane).
    pub aim_point: Position,
}

/// A pursuing enemy. Kind and stats are fixed at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub health: f64,
    pub max_health: f64,
    pub speed: f64,
    pub contact_damage: f64,
    pub score_value: u64,
    pub collision_radius: f64,
    /// Cosmetic yaw spin (radians), advanced by the movement system.
    pub yaw: f64,
    /// Cosmetic vertical bob offset, recomputed from sim time.
    pub bob_offset: f64,
}

/// A fired shot. Direction is fixed at creation — no homing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit travel direction.
    pub direction: DVec3,
    pub speed: f64,
    pub damage: f64,
}

/// Cosmetic world object placed by the streamer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scenery {
    pub kind: SceneryKind,
    /// Render hints chosen at generation time.
    pub scale: f64,
    pub rotation: f64,
}

/// Transient damage flash. Inserted on damage, removed by the effects
/// system once the expiry tick passes. Sim-clock driven so the state
/// stream stays deterministic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DamageFlash {
    pub expires_at_tick: u64,
}
