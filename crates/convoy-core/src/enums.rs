//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy variety. Fixed at spawn — an enemy never changes kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline pursuer.
    #[default]
    Basic,
    /// Smaller and quicker, weaker on contact.
    Fast,
    /// Large, slow, heavily armored, hits hard.
    Tank,
}

/// Base statistics for an enemy kind, before difficulty escalation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub health: f64,
    pub speed: f64,
    pub contact_damage: f64,
    pub score_value: u64,
    pub collision_radius: f64,
    /// Render scale hint relative to the base enemy model.
    pub scale: f64,
}

impl EnemyKind {
    /// Per-kind constant table (closed dispatch, no string tags).
    pub fn base_stats(self) -> EnemyStats {
        match self {
            EnemyKind::Basic => EnemyStats {
                health: 1.0,
                speed: 5.0,
                contact_damage: 10.0,
                score_value: 100,
                collision_radius: 1.0,
                scale: 1.0,
            },
            EnemyKind::Fast => EnemyStats {
                health: 1.0,
                speed: 8.0,
                contact_damage: 5.0,
                score_value: 150,
                collision_radius: 0.7,
                scale: 0.7,
            },
            EnemyKind::Tank => EnemyStats {
                health: 3.0,
                speed: 3.0,
                contact_damage: 20.0,
                score_value: 200,
                collision_radius: 1.5,
                scale: 1.5,
            },
        }
    }

    pub const ALL: [EnemyKind; 3] = [EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Tank];
}

/// Cosmetic scenery variety. No collision, no gameplay coupling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneryKind {
    Tree,
    Rock,
    Building,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Running,
    Paused,
    /// Terminal gameplay state — only Restart leaves it.
    GameOver,
}
