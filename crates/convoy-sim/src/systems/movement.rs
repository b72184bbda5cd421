//! Kinematic integration for enemies and projectiles.
//!
//! Enemies home on the convoy's current position; projectiles fly the
//! fixed direction they were created with. The enemy bob and yaw spin are
//! cosmetic and derived from the simulation clock, never the host clock.

use hecs::World;

use convoy_core::components::{Enemy, Projectile};
use convoy_core::constants::*;
use convoy_core::types::{Position, SimTime};

/// Advance all enemies toward the convoy and all projectiles along their
/// fixed directions.
pub fn run(world: &mut World, time: &SimTime, convoy_pos: Position) {
    for (_entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        let direction = pos.direction_to(&convoy_pos);
        pos.0 += direction * enemy.speed * DT;

        enemy.yaw += SPIN_RATE * DT;
        enemy.bob_offset = (time.elapsed_secs * BOB_FREQUENCY).sin() * BOB_AMPLITUDE;
    }

    for (_entity, (projectile, pos)) in world.query_mut::<(&Projectile, &mut Position)>() {
        pos.0 += projectile.direction * projectile.speed * DT;
    }
}
