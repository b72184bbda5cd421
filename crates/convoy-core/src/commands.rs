//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session from the main menu.
    StartGame,
    /// Restart after game over — fully reinitializes entity state.
    Restart,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
    /// Update the turret aim point. The frontend resolves the pointer
    /// against the ground plane and sends world coordinates.
    SetAim { x: f64, z: f64 },
    /// Request one shot. Edge-triggered: consumed at the next tick.
    Fire,
}
