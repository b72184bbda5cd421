//! Convoy application shell.
//!
//! Wires the simulation crates to a frontend transport: a game loop
//! thread, a command channel, and a snapshot slot for polling.

pub mod game_loop;
pub mod state;

pub use convoy_core as core;
