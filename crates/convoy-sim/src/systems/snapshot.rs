//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use convoy_core::components::*;
use convoy_core::constants::{ROAD_WIDTH, TILE_LENGTH};
use convoy_core::enums::GamePhase;
use convoy_core::events::UiEvent;
use convoy_core::state::*;
use convoy_core::types::{Position, SimTime};

use crate::streamer::Streamer;

/// Build a complete snapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: u64,
    distance_traveled: f64,
    level: u32,
    streamer: &Streamer,
    ui_events: Vec<UiEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score,
        distance_traveled,
        level,
        convoy: build_convoy(world),
        turret: build_turret(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        scenery: build_scenery(world),
        terrain: TerrainView {
            ground_tiles_z: streamer.ground_tiles_z.to_vec(),
            road_tiles_z: streamer.road_tiles_z.to_vec(),
            tile_length: TILE_LENGTH,
            road_width: ROAD_WIDTH,
        },
        ui_events,
    }
}

fn build_convoy(world: &World) -> ConvoyView {
    world
        .query::<(&Convoy, &Position)>()
        .iter()
        .next()
        .map(|(entity, (convoy, pos))| ConvoyView {
            position: *pos,
            health: convoy.health,
            max_health: convoy.max_health,
            flashing: world.get::<&DamageFlash>(entity).is_ok(),
        })
        .unwrap_or_default()
}

fn build_turret(world: &World) -> TurretView {
    world
        .query::<&Turret>()
        .iter()
        .next()
        .map(|(_, turret)| TurretView {
            aim_point: turret.aim_point,
            cooldown_remaining: turret.cooldown_remaining.max(0.0),
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| EnemyView {
            kind: enemy.kind,
            position: *pos,
            health_fraction: if enemy.max_health > 0.0 {
                enemy.health / enemy.max_health
            } else {
                0.0
            },
            yaw: enemy.yaw,
            bob_offset: enemy.bob_offset,
            scale: enemy.kind.base_stats().scale,
            flashing: world.get::<&DamageFlash>(entity).is_ok(),
        })
        .collect();

    // Stable order for deterministic serialization.
    enemies.sort_by(|a, b| {
        (a.position.z(), a.position.x())
            .partial_cmp(&(b.position.z(), b.position.x()))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            position: *pos,
            direction: projectile.direction.to_array(),
        })
        .collect();

    projectiles.sort_by(|a, b| {
        (a.position.z(), a.position.x())
            .partial_cmp(&(b.position.z(), b.position.x()))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    projectiles
}

fn build_scenery(world: &World) -> Vec<SceneryView> {
    let mut scenery: Vec<SceneryView> = world
        .query::<(&Scenery, &Position)>()
        .iter()
        .map(|(_, (obj, pos))| SceneryView {
            kind: obj.kind,
            position: *pos,
            scale: obj.scale,
            rotation: obj.rotation,
        })
        .collect();

    scenery.sort_by(|a, b| {
        (a.position.z(), a.position.x())
            .partial_cmp(&(b.position.z(), b.position.x()))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scenery
}
