//! Simulation systems, run in a fixed order each tick.
//!
//! Each system is a free function over the hecs world plus whatever
//! engine state it needs. See `SimulationEngine::run_systems` for the
//! per-frame ordering.

pub mod cleanup;
pub mod collision;
pub mod convoy;
pub mod difficulty;
pub mod effects;
pub mod enemy_spawn;
pub mod movement;
pub mod snapshot;
pub mod streaming;
pub mod turret;
