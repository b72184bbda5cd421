#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::UiEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime};

    /// Verify the boundary enums round-trip through serde_json.
    #[test]
    fn test_enemy_kind_serde() {
        for kind in EnemyKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn test_scenery_kind_serde() {
        let variants = [SceneryKind::Tree, SceneryKind::Rock, SceneryKind::Building];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SceneryKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = [
            GamePhase::MainMenu,
            GamePhase::Running,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_player_command_tagged_serde() {
        let cmd = PlayerCommand::SetAim { x: 4.0, z: 27.5 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SetAim\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PlayerCommand::SetAim { x, z } if x == 4.0 && z == 27.5));
    }

    #[test]
    fn test_ui_event_tagged_serde() {
        let event = UiEvent::GameOver { final_score: 1234 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"GameOver\""));
        let back: UiEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 0);
        assert_eq!(back.phase, GamePhase::MainMenu);
    }

    // ---- Type helpers ----

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 0.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_horizontal_range_ignores_height() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 100.0, 4.0);
        assert!((a.horizontal_range_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_direction_to_is_unit() {
        let a = Position::new(1.0, 0.0, 1.0);
        let b = Position::new(7.0, 2.0, -3.0);
        let dir = a.direction_to(&b);
        assert!((dir.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_direction_to_self_is_zero() {
        let a = Position::new(5.0, 0.0, 5.0);
        assert_eq!(a.direction_to(&a).length(), 0.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..crate::constants::TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, crate::constants::TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }
}
