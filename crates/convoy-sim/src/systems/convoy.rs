//! Convoy auto-advance system.
//!
//! The convoy drives itself forward along the travel axis; the player
//! never steers it. Returns the distance covered this tick so the engine
//! can accumulate total distance traveled.

use hecs::World;

use convoy_core::components::Convoy;
use convoy_core::constants::DT;
use convoy_core::types::Position;

/// Advance the convoy by one tick. Returns the distance advanced
/// (0.0 if no convoy exists).
pub fn run(world: &mut World) -> f64 {
    let mut advanced = 0.0;
    for (_entity, (convoy, pos)) in world.query_mut::<(&Convoy, &mut Position)>() {
        let step = convoy.speed * DT;
        pos.0.z += step;
        advanced = step;
    }
    advanced
}

/// Current convoy position, if a convoy exists.
pub fn convoy_position(world: &World) -> Option<Position> {
    world
        .query::<(&Convoy, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
