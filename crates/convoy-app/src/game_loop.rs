//! Game loop thread — runs the simulation engine at 60Hz and publishes
//! snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots go out through
//! a [`SnapshotSink`] (whatever transport the frontend uses) and are also
//! stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use convoy_core::constants::TICK_RATE;
use convoy_core::state::GameStateSnapshot;
use convoy_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Receives each tick's snapshot on the game loop thread.
///
/// Implemented for closures, so a frontend transport is just
/// `move |snapshot| { ... }`.
pub trait SnapshotSink: Send + 'static {
    fn publish(&mut self, snapshot: &GameStateSnapshot);
}

impl<F> SnapshotSink for F
where
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    fn publish(&mut self, snapshot: &GameStateSnapshot) {
        self(snapshot);
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the application layer to use.
pub fn spawn_game_loop(
    sink: impl SnapshotSink,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    config: SimConfig,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("convoy-game-loop".into())
        .spawn(move || {
            run_game_loop(sink, cmd_rx, &latest_snapshot, config);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut sink: impl SnapshotSink,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    config: SimConfig,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Publish the snapshot to the frontend transport
        sink.publish(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convoy_core::commands::PlayerCommand;
    use convoy_core::enums::GamePhase;
    use std::time::Duration;

    /// Poll the snapshot slot until the condition holds or a deadline
    /// passes. Keeps the thread tests tolerant of scheduler jitter.
    fn wait_for(
        slot: &Mutex<Option<GameStateSnapshot>>,
        condition: impl Fn(&GameStateSnapshot) -> bool,
    ) -> bool {
        for _ in 0..200 {
            if let Ok(latest) = slot.lock() {
                if latest.as_ref().is_some_and(&condition) {
                    return true;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_loop_publishes_monotonic_ticks() {
        let slot = Arc::new(Mutex::new(None));
        let ticks = Arc::new(Mutex::new(Vec::<u64>::new()));
        let sink_ticks = Arc::clone(&ticks);

        let tx = spawn_game_loop(
            move |snapshot: &GameStateSnapshot| {
                sink_ticks.lock().unwrap().push(snapshot.time.tick);
            },
            Arc::clone(&slot),
            SimConfig::default(),
        );

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        assert!(wait_for(&slot, |s| s.time.tick > 10));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        std::thread::sleep(Duration::from_millis(50));

        let ticks = ticks.lock().unwrap();
        assert!(ticks.len() > 10, "sink saw {} snapshots", ticks.len());
        // Once running, every published snapshot advances the sim clock.
        let running: Vec<u64> = ticks.iter().copied().filter(|t| *t > 0).collect();
        assert!(running.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_loop_forwards_pause_and_resume() {
        let slot = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(
            |_: &GameStateSnapshot| {},
            Arc::clone(&slot),
            SimConfig::default(),
        );

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        assert!(wait_for(&slot, |s| s.phase == GamePhase::Running));

        tx.send(GameLoopCommand::Player(PlayerCommand::Pause)).unwrap();
        assert!(wait_for(&slot, |s| s.phase == GamePhase::Paused));

        // Paused ticks keep publishing snapshots but the sim clock holds.
        let paused_tick = slot.lock().unwrap().as_ref().unwrap().time.tick;
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(
            slot.lock().unwrap().as_ref().unwrap().time.tick,
            paused_tick
        );

        tx.send(GameLoopCommand::Player(PlayerCommand::Resume)).unwrap();
        assert!(wait_for(&slot, |s| {
            s.phase == GamePhase::Running && s.time.tick > paused_tick
        }));

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_shutdown_stops_loop_thread() {
        let slot = Arc::new(Mutex::new(None));
        let published = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&published);

        let tx = spawn_game_loop(
            move |_snapshot: &GameStateSnapshot| {
                *counter.lock().unwrap() += 1;
            },
            Arc::clone(&slot),
            SimConfig::default(),
        );

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        assert!(wait_for(&slot, |s| s.time.tick > 0));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        std::thread::sleep(Duration::from_millis(100));

        let after_shutdown = *published.lock().unwrap();
        assert!(after_shutdown > 0, "loop should have published snapshots");

        // No further publishes after shutdown settles.
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(*published.lock().unwrap(), after_shutdown);

        let latest = slot.lock().unwrap();
        let snapshot = latest.as_ref().expect("polling slot should be filled");
        assert_eq!(snapshot.phase, GamePhase::Running);
    }
}
