//! F1 Dodge - A top-down F1 dodging game
//!
//! Core modules:
//! - `sim`: Simulation core (state machine, entities, spawning, difficulty, collisions)
//! - `config`: Startup configuration with validation
//! - `platform`: Frame limiter and input sources
//! - `runner`: Fixed-rate frame loop tying input, simulation, audio and rendering together
//! - `ui`: Main menu collaborator
//! - `audio`: Sound cue mapping

pub mod audio;
pub mod config;
pub mod highscores;
pub mod platform;
pub mod runner;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use highscores::HighScores;

/// Default tuning values (overridable through `GameConfig`)
pub mod consts {
    /// Target simulation rate (one tick per frame)
    pub const FPS: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Road geometry - road is centered on screen
    pub const ROAD_WIDTH: f32 = 400.0;
    pub const ROAD_SPEED: f32 = 5.0;
    pub const ROAD_LINE_HEIGHT: f32 = 40.0;
    pub const ROAD_LINE_GAP: f32 = 20.0;

    /// Player car
    pub const PLAYER_CAR_WIDTH: f32 = 50.0;
    pub const PLAYER_CAR_HEIGHT: f32 = 80.0;
    pub const PLAYER_CAR_SPEED: f32 = 5.0;
    /// Gap between the player's rear wing and the bottom of the screen
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

    /// Boost (1 second at 60 FPS)
    pub const BOOST_DURATION_FRAMES: u32 = 60;
    pub const BOOST_MULTIPLIER: f32 = 1.5;

    /// Obstacle cars
    pub const OBSTACLE_CAR_WIDTH: f32 = 50.0;
    pub const OBSTACLE_CAR_HEIGHT: f32 = 80.0;
    pub const OBSTACLE_CAR_SPEED: f32 = 5.0;

    /// Spawn pacing (frames)
    pub const INITIAL_SPAWN_DELAY: u32 = 90;
    pub const MIN_SPAWN_DELAY: u32 = 30;
    pub const SPAWN_DELAY_DECREASE: u32 = 2;

    /// Score thresholds for difficulty increases
    pub const SCORE_MILESTONES: [u64; 5] = [10, 25, 50, 100, 200];
    pub const SPEED_INCREASE_PER_MILESTONE: f32 = 1.0;

    /// Hitbox shrink per side (car bodies don't fill their bounding boxes)
    pub const COLLISION_INSET: f32 = 5.0;

    /// Horizontal offset of the twin boost trails from the exhaust center
    pub const BOOST_TRAIL_OFFSET: f32 = 10.0;
}
