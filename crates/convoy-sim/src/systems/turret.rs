//! Turret aim and fire system.
//!
//! The fire request is an edge-triggered flag set by the `Fire` command;
//! it is always consumed here, whether or not a shot actually leaves the
//! barrel (a request during cooldown is dropped, not queued).

use glam::DVec3;
use hecs::World;

use convoy_core::components::{Convoy, Turret};
use convoy_core::constants::*;
use convoy_core::types::Position;

use crate::world_setup;

/// Count down the cooldown and fire if requested and ready.
pub fn run(world: &mut World, fire_requested: &mut bool) {
    let mut shot: Option<(Position, DVec3)> = None;

    for (_entity, (_convoy, pos, turret)) in
        world.query_mut::<(&Convoy, &Position, &mut Turret)>()
    {
        if turret.cooldown_remaining > 0.0 {
            turret.cooldown_remaining -= DT;
        }

        if *fire_requested && turret.cooldown_remaining <= 0.0 {
            let muzzle = muzzle_transform(pos, &turret.aim_point);
            turret.cooldown_remaining = FIRE_COOLDOWN_SECS;
            shot = Some(muzzle);
        }
    }

    *fire_requested = false;

    if let Some((origin, direction)) = shot {
        world_setup::spawn_projectile(world, origin, direction);
    }
}

/// Barrel-end position and unit direction for a shot from the turret
/// mount toward the aim point.
fn muzzle_transform(convoy_pos: &Position, aim_point: &Position) -> (Position, DVec3) {
    let mount = Position::new(
        convoy_pos.x(),
        convoy_pos.y() + TURRET_HEIGHT,
        convoy_pos.z(),
    );
    let mut direction = mount.direction_to(aim_point);
    if direction == DVec3::ZERO {
        // Degenerate aim (point exactly at the mount): shoot forward.
        direction = DVec3::Z;
    }
    let origin = Position(mount.0 + direction * TURRET_BARREL_LENGTH);
    (origin, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muzzle_direction_points_down_at_ground_aim() {
        let convoy = Position::new(0.0, 0.0, 0.0);
        let aim = Position::new(0.0, 0.0, 10.0);
        let (origin, direction) = muzzle_transform(&convoy, &aim);
        // Aiming at a ground point from a raised mount angles downward.
        assert!(direction.y < 0.0);
        assert!(direction.z > 0.0);
        assert!((direction.length() - 1.0).abs() < 1e-12);
        // Barrel end sits ahead of the mount along the shot direction.
        assert!(origin.z() > 0.0);
    }
}
