//! Simulation engine for Convoy Strike.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and
//! produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod spawner;
pub mod streamer;
pub mod systems;
pub mod world_setup;

pub use convoy_core as core;
pub use engine::SimulationEngine;
