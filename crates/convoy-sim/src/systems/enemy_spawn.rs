//! Enemy spawn system — timed spawns on a ring around the convoy.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use convoy_core::components::Enemy;
use convoy_core::constants::*;
use convoy_core::types::Position;

use crate::spawner::EnemySpawner;
use crate::world_setup;

/// Accumulate the spawn timer and spawn one enemy when it expires and the
/// live population is below the level cap. At the cap the spawn is
/// skipped and the timer is left expired, so a freed slot is filled on
/// the very next tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut EnemySpawner,
    convoy_pos: Position,
) {
    spawner.spawn_timer += DT;
    if spawner.spawn_timer < spawner.spawn_interval {
        return;
    }

    let live = world.query_mut::<&Enemy>().into_iter().count();
    if live >= spawner.max_enemies {
        return;
    }
    spawner.spawn_timer = 0.0;

    let position = ring_position(rng, &convoy_pos);
    let entry = spawner.select_kind(rng.gen::<f64>());
    world_setup::spawn_enemy(world, entry, position);
    log::debug!("spawned {:?} enemy at z={:.1}", entry.kind, position.z());
}

/// Uniform random point on the spawn ring around the convoy, at ground level.
fn ring_position(rng: &mut ChaCha8Rng, convoy_pos: &Position) -> Position {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let radius: f64 = rng.gen_range(SPAWN_RING_INNER..SPAWN_RING_OUTER);
    Position::new(
        convoy_pos.x() + angle.cos() * radius,
        0.0,
        convoy_pos.z() + angle.sin() * radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_ring_position_within_annulus() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let convoy = Position::new(3.0, 0.0, 250.0);
        for _ in 0..200 {
            let pos = ring_position(&mut rng, &convoy);
            let range = convoy.horizontal_range_to(&pos);
            assert!(range >= SPAWN_RING_INNER && range < SPAWN_RING_OUTER);
            assert_eq!(pos.y(), 0.0);
        }
    }
}
