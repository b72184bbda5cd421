//! Headless demo session: starts the game loop, drives it with scripted
//! commands for a few seconds, then prints the final snapshot as JSON.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use convoy_core::commands::PlayerCommand;
use convoy_core::events::UiEvent;
use convoy_core::state::GameStateSnapshot;
use convoy_sim::engine::SimConfig;

use convoy_app::game_loop::spawn_game_loop;
use convoy_app::state::{AppState, GameLoopCommand};

fn main() {
    env_logger::init();

    let state = AppState::new();
    let sink = |snapshot: &GameStateSnapshot| {
        if snapshot
            .ui_events
            .iter()
            .any(|e| matches!(e, UiEvent::LevelChanged { .. }))
        {
            log::info!("reached level {}", snapshot.level);
        }
    };

    let tx = spawn_game_loop(
        sink,
        Arc::clone(&state.latest_snapshot),
        SimConfig::default(),
    );
    state.attach_loop(tx);

    state.send(GameLoopCommand::Player(PlayerCommand::StartGame));
    state.send(GameLoopCommand::Player(PlayerCommand::SetAim {
        x: 5.0,
        z: 35.0,
    }));

    // Fire a burst every 100ms for five seconds of wall time.
    for _ in 0..50 {
        if !state.send(GameLoopCommand::Player(PlayerCommand::Fire)) {
            log::error!("game loop thread is gone");
            break;
        }
        thread::sleep(Duration::from_millis(100));
    }

    let final_snapshot = state.snapshot();
    state.send(GameLoopCommand::Shutdown);

    match final_snapshot.map(|s| serde_json::to_string_pretty(&s)) {
        Some(Ok(json)) => println!("{json}"),
        _ => log::error!("no snapshot produced"),
    }
}
