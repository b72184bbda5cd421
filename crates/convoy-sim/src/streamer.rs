//! Infinite-world streaming state: the ground/road tile rings and the
//! scenery generation cursor.
//!
//! Tiles are a small fixed set laid end-to-end along the travel axis.
//! A tile that falls a full tile length behind the convoy is relocated
//! ahead of the current frontmost tile — an O(tiles) recycle with the
//! frontmost recomputed by scanning, matching the original behavior.

use convoy_core::constants::*;

/// Tile ring and scenery window state. Scenery entities themselves live
/// in the ECS world; this tracks only the generation cursor.
#[derive(Debug, Clone)]
pub struct Streamer {
    /// Z origin of each ground tile.
    pub ground_tiles_z: [f64; TILE_COUNT],
    /// Z origin of each road tile.
    pub road_tiles_z: [f64; TILE_COUNT],
    /// High-water mark of scenery generation along the travel axis.
    pub last_generation_z: f64,
}

impl Default for Streamer {
    fn default() -> Self {
        Self::new()
    }
}

impl Streamer {
    pub fn new() -> Self {
        let mut tiles = [0.0; TILE_COUNT];
        for (i, z) in tiles.iter_mut().enumerate() {
            *z = i as f64 * TILE_LENGTH - TILE_LENGTH;
        }
        Self {
            ground_tiles_z: tiles,
            road_tiles_z: tiles,
            last_generation_z: 0.0,
        }
    }

    /// Recycle both tile rings around the given convoy Z.
    pub fn recycle_tiles(&mut self, convoy_z: f64) {
        recycle_ring(&mut self.ground_tiles_z, convoy_z);
        recycle_ring(&mut self.road_tiles_z, convoy_z);
    }

    /// Whether the scenery window needs another generation chunk.
    pub fn needs_generation(&self, convoy_z: f64) -> bool {
        convoy_z + SCENERY_RENDER_DISTANCE > self.last_generation_z
    }

    /// Claim the next generation chunk, returning its [start, end) Z range.
    pub fn next_chunk(&mut self) -> (f64, f64) {
        let start = self.last_generation_z;
        let end = start + SCENERY_GENERATION_DISTANCE;
        self.last_generation_z = end;
        (start, end)
    }

    /// Claim the initial back-filled window around a starting position,
    /// returning its [start, end) Z range.
    pub fn initial_window(&mut self, convoy_z: f64) -> (f64, f64) {
        let start = convoy_z - SCENERY_INITIAL_BACKFILL;
        let end = convoy_z + SCENERY_RENDER_DISTANCE;
        self.last_generation_z = end;
        (start, end)
    }
}

/// Move any tile more than one tile length behind the convoy to sit
/// immediately ahead of the frontmost tile.
fn recycle_ring(tiles: &mut [f64; TILE_COUNT], convoy_z: f64) {
    for i in 0..tiles.len() {
        if tiles[i] - convoy_z < -TILE_LENGTH {
            // Frontmost is recomputed per relocation, not maintained.
            let front = tiles.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            tiles[i] = front + TILE_LENGTH;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tile_layout() {
        let streamer = Streamer::new();
        assert_eq!(streamer.ground_tiles_z, [-1000.0, 0.0, 1000.0]);
        assert_eq!(streamer.road_tiles_z, [-1000.0, 0.0, 1000.0]);
    }

    #[test]
    fn test_tile_recycles_to_front() {
        let mut streamer = Streamer::new();
        // Convoy has advanced far enough that the rearmost tile is stale.
        streamer.recycle_tiles(5.0);
        assert_eq!(streamer.ground_tiles_z, [2000.0, 0.0, 1000.0]);
    }

    #[test]
    fn test_tile_not_recycled_at_exact_boundary() {
        let mut streamer = Streamer::new();
        // Rear tile at -1000 is exactly one tile length behind: kept.
        streamer.recycle_tiles(0.0);
        assert_eq!(streamer.ground_tiles_z, [-1000.0, 0.0, 1000.0]);
    }

    #[test]
    fn test_ring_stays_contiguous_over_long_travel() {
        let mut streamer = Streamer::new();
        for step in 0..500 {
            streamer.recycle_tiles(step as f64 * 25.0);
        }
        let mut tiles = streamer.ground_tiles_z;
        tiles.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(tiles[1] - tiles[0], TILE_LENGTH);
        assert_eq!(tiles[2] - tiles[1], TILE_LENGTH);
    }

    #[test]
    fn test_generation_cursor_advances_by_chunk() {
        let mut streamer = Streamer::new();
        let (start, end) = streamer.initial_window(0.0);
        assert_eq!(start, -SCENERY_INITIAL_BACKFILL);
        assert_eq!(end, SCENERY_RENDER_DISTANCE);
        assert!(!streamer.needs_generation(0.0));

        let (start, end) = streamer.next_chunk();
        assert_eq!(start, SCENERY_RENDER_DISTANCE);
        assert_eq!(end, SCENERY_RENDER_DISTANCE + SCENERY_GENERATION_DISTANCE);
    }
}
