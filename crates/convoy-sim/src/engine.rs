//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless (no renderer dependency), enabling deterministic
//! testing: same seed + same command sequence = same snapshot stream.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use convoy_core::commands::PlayerCommand;
use convoy_core::components::Turret;
use convoy_core::enums::GamePhase;
use convoy_core::events::UiEvent;
use convoy_core::state::GameStateSnapshot;
use convoy_core::types::{Position, SimTime};

use crate::spawner::EnemySpawner;
use crate::streamer::Streamer;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Running score state. The displayed score is distance traveled plus
/// accumulated kill points. (The original prototype recomputed score from
/// distance alone each frame, silently discarding kill points the next
/// frame; keeping both is the documented redesign — see DESIGN.md.)
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub kill_points: u64,
    pub distance_traveled: f64,
}

impl ScoreState {
    pub fn total(&self) -> u64 {
        self.distance_traveled.floor() as u64 + self.kill_points
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    ui_events: Vec<UiEvent>,

    score: ScoreState,
    last_reported_score: u64,
    level: u32,
    last_difficulty_increase: f64,
    fire_requested: bool,
    spawner: EnemySpawner,
    streamer: Streamer,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            ui_events: Vec::new(),
            score: ScoreState::default(),
            last_reported_score: 0,
            level: 1,
            last_difficulty_increase: 0.0,
            fire_requested: false,
            spawner: EnemySpawner::default(),
            streamer: Streamer::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let ui_events = std::mem::take(&mut self.ui_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.score.total(),
            self.score.distance_traveled,
            self.level,
            &self.streamer,
            ui_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current difficulty level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Get the current score state.
    pub fn score(&self) -> ScoreState {
        self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawner state access for test assertions.
    #[cfg(test)]
    pub fn spawner(&self) -> &EnemySpawner {
        &self.spawner
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                if matches!(self.phase, GamePhase::GameOver | GamePhase::Running) {
                    self.start_session();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::SetAim { x, z } => {
                for (_entity, turret) in self.world.query_mut::<&mut Turret>() {
                    turret.aim_point = Position::new(x, 0.0, z);
                }
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Running {
                    self.fire_requested = true;
                }
            }
        }
    }

    /// Fully reinitialize entity and session state, then go live.
    fn start_session(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.score = ScoreState::default();
        self.last_reported_score = 0;
        self.level = 1;
        self.last_difficulty_increase = 0.0;
        self.fire_requested = false;
        self.spawner.reset(1);
        self.streamer = Streamer::new();
        self.ui_events.clear();
        self.despawn_buffer.clear();

        world_setup::spawn_convoy(&mut self.world);
        let convoy_pos = Position::new(0.0, 0.0, 0.0);
        systems::streaming::populate_initial(
            &mut self.world,
            &mut self.rng,
            &mut self.streamer,
            convoy_pos,
        );

        self.phase = GamePhase::Running;
        self.ui_events.push(UiEvent::HealthChanged {
            health: convoy_core::constants::CONVOY_MAX_HEALTH,
            max_health: convoy_core::constants::CONVOY_MAX_HEALTH,
        });
        self.ui_events.push(UiEvent::LevelChanged { level: 1 });
        log::info!("session started");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Convoy auto-advance; distance accumulates on the sim clock.
        let advanced = systems::convoy::run(&mut self.world);
        self.score.distance_traveled += advanced;

        let convoy_pos = match systems::convoy::convoy_position(&self.world) {
            Some(pos) => pos,
            None => return,
        };

        // 2. Turret cooldown + fire (consumes the edge-triggered request).
        systems::turret::run(&mut self.world, &mut self.fire_requested);

        // 3. Enemy spawning on the ring around the convoy.
        systems::enemy_spawn::run(&mut self.world, &mut self.rng, &mut self.spawner, convoy_pos);

        // 4. Movement integration (enemies home, projectiles fly straight).
        systems::movement::run(&mut self.world, &self.time, convoy_pos);

        // 5. Collision pass. May end the session.
        systems::collision::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.score,
            &mut self.ui_events,
            &mut self.phase,
            self.time.tick,
        );
        if self.phase != GamePhase::Running {
            // Coarse cancellation: abandon the rest of the frame.
            return;
        }

        // 6. Environment streaming around the moving reference point.
        systems::streaming::run(
            &mut self.world,
            &mut self.rng,
            &mut self.streamer,
            convoy_pos,
            &mut self.despawn_buffer,
        );

        // 7. Difficulty ramp keyed to distance traveled.
        systems::difficulty::run(
            self.score.distance_traveled,
            &mut self.last_difficulty_increase,
            &mut self.level,
            &mut self.spawner,
            &mut self.ui_events,
        );

        // 8. Expire transient damage flashes.
        systems::effects::run(&mut self.world, self.time.tick, &mut self.despawn_buffer);

        // 9. Despawn far-off enemies and projectiles.
        systems::cleanup::run(&mut self.world, convoy_pos, &mut self.despawn_buffer);

        // Funnel score changes (distance and kills alike) to the UI.
        let score = self.score.total();
        if score != self.last_reported_score {
            self.ui_events.push(UiEvent::ScoreChanged { score });
            self.last_reported_score = score;
        }
    }
}
