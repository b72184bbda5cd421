//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the convoy, enemies, projectiles, and scenery with
//! appropriate component bundles.

use glam::DVec3;
use hecs::World;

use convoy_core::components::*;
use convoy_core::constants::*;
#[cfg(test)]
use convoy_core::enums::EnemyKind;
use convoy_core::enums::SceneryKind;
use convoy_core::types::Position;

use crate::spawner::TypeEntry;

/// Spawn the player's convoy at the origin, turret mounted.
pub fn spawn_convoy(world: &mut World) -> hecs::Entity {
    world.spawn((
        Convoy {
            health: CONVOY_MAX_HEALTH,
            max_health: CONVOY_MAX_HEALTH,
            speed: CONVOY_SPEED,
            collision_radius: CONVOY_COLLISION_RADIUS,
        },
        Turret {
            cooldown_remaining: 0.0,
            // Default aim: straight ahead along the travel axis.
            aim_point: Position::new(0.0, 0.0, 10.0),
        },
        Position::new(0.0, 0.0, 0.0),
    ))
}

/// Spawn one enemy of the given table entry at a world position.
/// Health/damage/score come from the (possibly escalated) spawn table;
/// speed, radius, and scale are kind constants.
pub fn spawn_enemy(world: &mut World, entry: TypeEntry, position: Position) -> hecs::Entity {
    let stats = entry.kind.base_stats();
    world.spawn((
        Enemy {
            kind: entry.kind,
            health: entry.health,
            max_health: entry.health,
            speed: stats.speed,
            contact_damage: entry.contact_damage,
            score_value: entry.score_value,
            collision_radius: stats.collision_radius,
            yaw: 0.0,
            bob_offset: 0.0,
        },
        position,
    ))
}

/// Spawn an enemy with explicit kind and default base stats (test setup).
#[cfg(test)]
pub fn spawn_enemy_of_kind(
    world: &mut World,
    kind: EnemyKind,
    position: Position,
) -> hecs::Entity {
    let stats = kind.base_stats();
    spawn_enemy(
        world,
        TypeEntry {
            kind,
            base_probability: 0.0,
            health: stats.health,
            contact_damage: stats.contact_damage,
            score_value: stats.score_value,
        },
        position,
    )
}

/// Spawn a projectile at a position with a fixed unit direction.
pub fn spawn_projectile(world: &mut World, position: Position, direction: DVec3) -> hecs::Entity {
    world.spawn((
        Projectile {
            direction,
            speed: PROJECTILE_SPEED,
            damage: PROJECTILE_DAMAGE,
        },
        position,
    ))
}

/// Spawn a scenery object with its render hints.
pub fn spawn_scenery(
    world: &mut World,
    kind: SceneryKind,
    position: Position,
    scale: f64,
    rotation: f64,
) -> hecs::Entity {
    world.spawn((
        Scenery {
            kind,
            scale,
            rotation,
        },
        position,
    ))
}
