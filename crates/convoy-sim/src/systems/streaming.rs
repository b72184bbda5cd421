//! Environment streaming: tile recycling, scenery generation ahead of the
//! convoy, and despawn behind it.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use convoy_core::components::Scenery;
use convoy_core::constants::*;
use convoy_core::enums::SceneryKind;
use convoy_core::types::Position;

use crate::streamer::Streamer;
use crate::world_setup;

/// Run one streaming tick: recycle tiles, extend the scenery window if the
/// convoy is close to its edge, and remove scenery left far behind.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    streamer: &mut Streamer,
    convoy_pos: Position,
    despawn_buffer: &mut Vec<Entity>,
) {
    streamer.recycle_tiles(convoy_pos.z());

    if streamer.needs_generation(convoy_pos.z()) {
        let (start, end) = streamer.next_chunk();
        generate_scenery(world, rng, start, end, SCENERY_CHUNK_COUNT);
    }

    despawn_behind(world, convoy_pos.z(), despawn_buffer);
}

/// Back-fill the initial scenery window around the session start position.
pub fn populate_initial(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    streamer: &mut Streamer,
    convoy_pos: Position,
) {
    let (start, end) = streamer.initial_window(convoy_pos.z());
    generate_scenery(world, rng, start, end, SCENERY_INITIAL_COUNT);
}

/// Place up to `candidates` scenery objects in the given Z window.
/// Candidates landing on or near the road are rejected and not re-rolled,
/// so density is systematically lower near the centerline. Preserved as
/// observed behavior.
fn generate_scenery(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    start_z: f64,
    end_z: f64,
    candidates: usize,
) {
    for _ in 0..candidates {
        let x = (rng.gen::<f64>() - 0.5) * (SCENERY_LATERAL_HALF_BAND * 2.0);
        let z = start_z + rng.gen::<f64>() * (end_z - start_z);

        if x.abs() < ROAD_WIDTH / 2.0 + SCENERY_ROAD_MARGIN {
            continue;
        }

        let kind_roll: f64 = rng.gen();
        let kind = if kind_roll < SCENERY_TREE_THRESHOLD {
            SceneryKind::Tree
        } else if kind_roll < SCENERY_ROCK_THRESHOLD {
            SceneryKind::Rock
        } else {
            SceneryKind::Building
        };

        let (scale, rotation) = render_hints(rng, kind);
        world_setup::spawn_scenery(world, kind, Position::new(x, 0.0, z), scale, rotation);
    }
}

/// Random scale/rotation hints per kind, matching the original ranges.
fn render_hints(rng: &mut ChaCha8Rng, kind: SceneryKind) -> (f64, f64) {
    let rotation = rng.gen::<f64>() * std::f64::consts::TAU;
    let scale = match kind {
        SceneryKind::Tree => 0.8 + rng.gen::<f64>() * 1.2,
        SceneryKind::Rock => 0.5 + rng.gen::<f64>() * 1.5,
        SceneryKind::Building => 0.6 + rng.gen::<f64>() * 0.8,
    };
    (scale, rotation)
}

/// Remove every scenery object more than the despawn distance behind the
/// convoy.
fn despawn_behind(world: &mut World, convoy_z: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_scenery, pos)) in world.query_mut::<(&Scenery, &Position)>() {
        let distance_behind = convoy_z - pos.z();
        if distance_behind > SCENERY_DESPAWN_DISTANCE {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
