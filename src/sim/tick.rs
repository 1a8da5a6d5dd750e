//! Fixed-rate simulation tick
//!
//! One call to `Simulation::frame` per displayed frame: dispatch the frame's
//! discrete commands, steer from held keys, advance the world while Playing,
//! then age the particles.

use glam::Vec2;

use super::collision::{CollisionOracle, PreciseCollision};
use super::difficulty::DifficultyController;
use super::machine::{Effect, GameState, GameStateMachine, Trigger};
use super::particles::{ParticleSystem, Particles};
use super::spawner::DifficultySpawner;
use super::state::{GameEvent, Obstacle, Player, Road, Session};
use crate::config::{ConfigError, GameConfig};
use crate::consts::BOOST_TRAIL_OFFSET;
use crate::highscores::HighScores;
use crate::ui::{MainMenu, MenuAction};

/// One-shot key-down / pointer-down inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Left arrow pressed: one step left
    MoveLeft,
    /// Right arrow pressed: one step right
    MoveRight,
    /// Space: boost while playing, restart after game over
    BoostOrRestart,
    /// P
    TogglePause,
    /// Escape
    Menu,
    /// Primary pointer button pressed at a screen position (menu only)
    Click(Vec2),
    /// Window closed
    Quit,
}

/// Continuous key state, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Everything polled for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Discrete events, in arrival order
    pub commands: Vec<Command>,
    pub held: HeldKeys,
}

impl TickInput {
    pub fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
            held: HeldKeys::default(),
        }
    }

    pub fn held(held: HeldKeys) -> Self {
        Self {
            commands: Vec::new(),
            held,
        }
    }
}

/// Read-only view handed to renderers and input sources
pub struct FrameView<'a> {
    pub state: GameState,
    pub player: &'a Player,
    pub road: &'a Road,
    pub obstacles: &'a [Obstacle],
    pub session: &'a Session,
    pub high_score: u64,
    pub menu: &'a MainMenu,
    pub particles: &'a dyn ParticleSystem,
    pub screen: Vec2,
}

/// The whole game: state machine, entities, and the collaborators they drive
pub struct Simulation<P = Particles, C = PreciseCollision> {
    pub config: GameConfig,
    pub machine: GameStateMachine,
    pub player: Player,
    pub road: Road,
    pub session: Session,
    /// Live obstacles in creation order
    pub obstacles: Vec<Obstacle>,
    pub spawner: DifficultySpawner,
    pub difficulty: DifficultyController,
    pub particles: P,
    pub oracle: C,
    pub menu: MainMenu,
    pub highscores: HighScores,
    events: Vec<GameEvent>,
    quit_requested: bool,
}

impl Simulation {
    /// Simulation with the default particle system and collision oracle
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let particles = Particles::new(seed.wrapping_add(1));
        let oracle = PreciseCollision::new(config.collision_inset);
        Self::with_parts(config, seed, particles, oracle)
    }
}

impl<P: ParticleSystem, C: CollisionOracle> Simulation<P, C> {
    pub fn with_parts(
        config: GameConfig,
        seed: u64,
        particles: P,
        oracle: C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            machine: GameStateMachine::new(),
            player: Player::new(&config),
            road: Road::new(&config),
            session: Session::new(config.initial_spawn_delay),
            obstacles: Vec::new(),
            spawner: DifficultySpawner::from_seed(&config, seed),
            difficulty: DifficultyController::new(config.milestones.clone()),
            particles,
            oracle,
            menu: MainMenu::new(config.screen_width, config.screen_height),
            highscores: HighScores::new(),
            events: Vec::new(),
            quit_requested: false,
            config,
        })
    }

    pub fn state(&self) -> GameState {
        self.machine.current()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Best score seen this process, including the run in progress
    pub fn high_score(&self) -> u64 {
        self.highscores
            .top_score()
            .unwrap_or(0)
            .max(self.session.score)
    }

    /// Take the events queued since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            state: self.machine.current(),
            player: &self.player,
            road: &self.road,
            obstacles: &self.obstacles,
            session: &self.session,
            high_score: self.high_score(),
            menu: &self.menu,
            particles: &self.particles,
            screen: Vec2::new(self.config.screen_width, self.config.screen_height),
        }
    }

    /// Run one frame
    pub fn frame(&mut self, input: &TickInput) {
        for &command in &input.commands {
            self.dispatch(command);
        }

        if self.machine.is(GameState::Playing) {
            self.steer(input.held);
            self.update();
        }

        self.particles.update();
    }

    /// Route a discrete input according to the current state
    pub fn dispatch(&mut self, command: Command) {
        match (self.machine.current(), command) {
            (_, Command::Quit) => self.quit_requested = true,

            (GameState::Menu, Command::Click(pointer)) => match self.menu.handle_click(pointer) {
                MenuAction::Start => self.fire(Trigger::Start),
                MenuAction::Quit => self.quit_requested = true,
                MenuAction::None => {}
            },

            (GameState::Playing, Command::MoveLeft) => self.player.move_left(self.road.left),
            (GameState::Playing, Command::MoveRight) => self.player.move_right(self.road.right),

            (GameState::Playing, Command::BoostOrRestart) => {
                self.player.activate_boost();
                self.events.push(GameEvent::BoostActivated);
            }
            (GameState::GameOver, Command::BoostOrRestart) => self.fire(Trigger::Restart),

            (_, Command::TogglePause) => self.fire(Trigger::TogglePause),
            (_, Command::Menu) => self.fire(Trigger::Menu),

            (GameState::Menu | GameState::Paused | GameState::GameOver, Command::MoveLeft)
            | (GameState::Menu | GameState::Paused | GameState::GameOver, Command::MoveRight)
            | (GameState::Menu, Command::BoostOrRestart)
            | (GameState::Paused, Command::BoostOrRestart)
            | (GameState::Playing | GameState::Paused | GameState::GameOver, Command::Click(_)) => {}
        }
    }

    /// Apply a trigger to the state machine and carry out its side effect
    fn fire(&mut self, trigger: Trigger) {
        let Some(transition) = self.machine.fire(trigger) else {
            return;
        };

        log::info!("State {:?} -> {:?}", transition.from, transition.to);
        self.events.push(GameEvent::StateChanged {
            from: transition.from,
            to: transition.to,
        });

        match transition.effect {
            Effect::Nothing => {}
            Effect::ResetSession => self.reset(),
            Effect::FreezeSession => self.freeze(),
        }
    }

    /// Reinitialize everything a run touches
    pub fn reset(&mut self) {
        self.player.reset(self.config.player_start());
        self.obstacles.clear();
        self.particles.clear();
        self.session.reset();
        self.road.reset();
        log::info!("Session reset");
    }

    fn freeze(&mut self) {
        let score = self.session.score;
        self.session.final_score = Some(score);
        match self.highscores.add_score(score) {
            Some(rank) => log::info!("Game over - final score {score} (rank #{rank})"),
            None => log::info!("Game over - final score {score}"),
        }
    }

    /// Held-key movement, clamped to the road
    fn steer(&mut self, held: HeldKeys) {
        let (left, right) = self.road.bounds();
        if held.left {
            self.player.move_left(left);
        }
        if held.right {
            self.player.move_right(right);
        }
    }

    /// Advance the world by one playing tick
    fn update(&mut self) {
        self.session.ticks += 1;
        // Obstacles spawned below are first moved next tick
        let live = self.obstacles.len();

        self.road.advance();
        self.player.advance();

        let exhaust = self.player.exhaust_point();
        self.particles
            .emit_exhaust(exhaust, self.player.boost_active);
        if self.player.boost_active {
            let offset = Vec2::new(BOOST_TRAIL_OFFSET, 0.0);
            self.particles.emit_boost_trail(exhaust - offset);
            self.particles.emit_boost_trail(exhaust + offset);
        }

        if let Some(obstacle) = self.spawner.tick(&mut self.session, &self.road) {
            self.events.push(GameEvent::ObstacleSpawned { id: obstacle.id });
            self.obstacles.push(obstacle);
        }

        self.move_obstacles(live);

        let applied = self.difficulty.apply(
            &mut self.session,
            &mut self.player,
            &mut self.road,
            &mut self.obstacles,
        );
        for milestone in applied {
            self.events.push(GameEvent::MilestoneReached {
                score: milestone.score,
                speed_increase: milestone.speed_increase,
            });
        }
    }

    /// Move the first `live` obstacles, credit every one that left the screen
    /// and look for the first crash. Game over is entered after the scan, so
    /// the final score includes exits later in the same pass.
    fn move_obstacles(&mut self, live: usize) {
        let screen_height = self.config.screen_height;
        let player_rect = self.player.rect();
        let mut exited = Vec::new();
        let mut crash = None;

        for obstacle in &mut self.obstacles[..live] {
            obstacle.move_down();

            if obstacle.is_off_screen(screen_height) {
                exited.push(obstacle.id);
                self.session.score += 1;
                log::debug!("Obstacle {} cleared, score {}", obstacle.id, self.session.score);
                self.events.push(GameEvent::ObstacleCleared {
                    id: obstacle.id,
                    score: self.session.score,
                });
                continue;
            }

            if crash.is_none() {
                let result = self.oracle.check(&player_rect, &obstacle.rect());
                if result.hit {
                    crash = Some((obstacle.id, result.point));
                }
            }
        }

        if !exited.is_empty() {
            self.obstacles.retain(|o| !exited.contains(&o.id));
        }

        if let Some((obstacle_id, point)) = crash {
            log::info!("Collision with obstacle {obstacle_id} at {point:?}");
            if let Some(point) = point {
                self.particles.emit_collision_sparks(point);
            }
            self.events.push(GameEvent::Collision { obstacle_id, point });
            self.fire(Trigger::Collision);
        }
    }
}
