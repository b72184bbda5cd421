//! Difficulty ramp — unbounded integer levels keyed to distance traveled.

use convoy_core::constants::DIFFICULTY_DISTANCE_INTERVAL;
use convoy_core::events::UiEvent;

use crate::spawner::EnemySpawner;

/// Check the distance ramp and apply a level increase when a new interval
/// boundary has been crossed since the last increase.
pub fn run(
    distance_traveled: f64,
    last_increase_distance: &mut f64,
    level: &mut u32,
    spawner: &mut EnemySpawner,
    ui_events: &mut Vec<UiEvent>,
) {
    let interval = DIFFICULTY_DISTANCE_INTERVAL;
    if (distance_traveled / interval).floor() <= (*last_increase_distance / interval).floor() {
        return;
    }

    *level = (distance_traveled / interval).floor() as u32 + 1;
    *last_increase_distance = distance_traveled;
    spawner.set_difficulty(*level);
    ui_events.push(UiEvent::LevelChanged { level: *level });
    log::info!(
        "difficulty increased to level {} at {:.0} units",
        level,
        distance_traveled
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_increase_below_interval() {
        let mut last = 0.0;
        let mut level = 1;
        let mut spawner = EnemySpawner::default();
        let mut events = Vec::new();

        run(499.9, &mut last, &mut level, &mut spawner, &mut events);
        assert_eq!(level, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_increase_at_interval_boundary() {
        let mut last = 0.0;
        let mut level = 1;
        let mut spawner = EnemySpawner::default();
        let mut events = Vec::new();

        run(500.1, &mut last, &mut level, &mut spawner, &mut events);
        assert_eq!(level, 2);
        assert_eq!(last, 500.1);
        assert_eq!(events, vec![UiEvent::LevelChanged { level: 2 }]);
        assert_eq!(spawner.max_enemies, 14);
    }

    #[test]
    fn test_level_tracks_distance_not_call_count() {
        let mut last = 0.0;
        let mut level = 1;
        let mut spawner = EnemySpawner::default();
        let mut events = Vec::new();

        // A large jump lands directly on the matching level.
        run(2600.0, &mut last, &mut level, &mut spawner, &mut events);
        assert_eq!(level, 6);
    }
}
