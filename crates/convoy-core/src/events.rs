//! Events emitted by the simulation for the UI collaborator.

use serde::{Deserialize, Serialize};

/// UI notifications. The simulation funnels every health/score/level
/// change through these; presentation is entirely the frontend's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    /// Running score changed.
    ScoreChanged { score: u64 },
    /// Convoy health changed.
    HealthChanged { health: f64, max_health: f64 },
    /// Difficulty level increased.
    LevelChanged { level: u32 },
    /// Terminal state reached, with the final score.
    GameOver { final_score: u64 },
}
