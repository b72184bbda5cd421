//! Application state shared between the frontend-facing layer and the
//! game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use convoy_core::commands::PlayerCommand;
use convoy_core::state::GameStateSnapshot;

/// Commands sent from the application layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state. Everything here must be Send + Sync, so the
/// loop's `mpsc::Sender` (Send but not Sync) lives behind a `Mutex` and
/// stays `None` until a loop is attached.
pub struct AppState {
    command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling. Updated by the game loop
    /// thread after each tick; hand a clone of this to `spawn_game_loop`.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a spawned loop's command sender and mark the loop live.
    pub fn attach_loop(&self, tx: mpsc::Sender<GameLoopCommand>) {
        if let Ok(mut slot) = self.command_tx.lock() {
            *slot = Some(tx);
        }
        if let Ok(mut running) = self.running.lock() {
            *running = true;
        }
    }

    /// Forward a command to the attached loop. Returns false when no loop
    /// is attached or the loop thread is gone.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(slot) => match slot.as_ref() {
                Some(tx) => tx.send(command).is_ok(),
                None => false,
            },
            Err(_) => false,
        }
    }

    /// Whether a loop has been attached.
    pub fn is_running(&self) -> bool {
        self.running.lock().map(|r| *r).unwrap_or(false)
    }

    /// Clone the most recent snapshot out of the polling slot.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|slot| slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_without_attached_loop_fails() {
        let state = AppState::new();
        assert!(!state.is_running());
        assert!(!state.send(GameLoopCommand::Player(PlayerCommand::Fire)));
    }

    #[test]
    fn test_attached_loop_receives_commands() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        state.attach_loop(tx);
        assert!(state.is_running());

        assert!(state.send(GameLoopCommand::Player(PlayerCommand::StartGame)));
        assert!(state.send(GameLoopCommand::Shutdown));

        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::Player(PlayerCommand::StartGame))
        ));
        assert!(matches!(rx.try_recv(), Ok(GameLoopCommand::Shutdown)));
    }

    #[test]
    fn test_send_detects_dead_loop() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        state.attach_loop(tx);
        drop(rx);
        assert!(!state.send(GameLoopCommand::Player(PlayerCommand::Fire)));
    }

    #[test]
    fn test_snapshot_empty_until_loop_writes() {
        let state = AppState::new();
        assert!(state.snapshot().is_none());

        if let Ok(mut slot) = state.latest_snapshot.lock() {
            *slot = Some(GameStateSnapshot::default());
        }
        assert!(state.snapshot().is_some());
    }
}
