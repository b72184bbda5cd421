//! Cleanup system: removes entities that wandered too far from the convoy.
//!
//! Enemies past the despawn range wandered off — they are removed without
//! scoring. Projectiles past theirs simply expire. Uses a pre-allocated
//! buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use convoy_core::components::{Enemy, Projectile};
use convoy_core::constants::{ENEMY_DESPAWN_RANGE, PROJECTILE_DESPAWN_RANGE};
use convoy_core::types::Position;

/// Remove enemies and projectiles beyond their despawn thresholds.
pub fn run(world: &mut World, convoy_pos: Position, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_enemy, pos)) in world.query_mut::<(&Enemy, &Position)>() {
        if pos.range_to(&convoy_pos) > ENEMY_DESPAWN_RANGE {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if pos.range_to(&convoy_pos) > PROJECTILE_DESPAWN_RANGE {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
