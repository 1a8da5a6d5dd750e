//! Game configuration
//!
//! Every tunable is fixed at process start. A config is either the built-in
//! defaults or a JSON file; both go through `validate()` before the frame loop
//! is allowed to start.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// A score threshold and the speed it adds once crossed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub score: u64,
    pub speed_increase: f32,
}

/// Reasons a configuration is rejected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("road width {road} does not fit on a screen {screen} wide")]
    RoadWiderThanScreen { road: f32, screen: f32 },
    #[error("{what} width {width} does not fit on a road {road} wide")]
    CarWiderThanRoad {
        what: &'static str,
        width: f32,
        road: f32,
    },
    #[error("player car (height {height} + margin {margin}) does not fit on a screen {screen} tall")]
    PlayerTallerThanScreen { height: f32, margin: f32, screen: f32 },
    #[error("minimum spawn delay {min} exceeds initial spawn delay {initial}")]
    SpawnDelayRange { min: u32, initial: u32 },
    #[error("milestone thresholds must be strictly ascending: {prev} then {next}")]
    MilestonesNotAscending { prev: u64, next: u64 },
    #[error("milestone at score {score} has invalid speed increase {value}")]
    MilestoneIncrease { score: u64, value: f32 },
    #[error("boost multiplier must be finite and at least 1.0, got {0}")]
    BoostMultiplier(f32),
    #[error("collision inset {inset} leaves no hitbox for a {width}x{height} car")]
    CollisionInset { inset: f32, width: f32, height: f32 },
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Startup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen / road ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub road_width: f32,
    /// Initial lane-marking scroll speed (px/frame)
    pub road_speed: f32,
    pub road_line_height: f32,
    pub road_line_gap: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Lateral speed (px/frame)
    pub player_speed: f32,
    pub player_bottom_margin: f32,
    pub boost_duration_frames: u32,
    pub boost_multiplier: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Downward speed of a freshly spawned obstacle (px/frame)
    pub obstacle_speed: f32,
    pub initial_spawn_delay: u32,
    pub min_spawn_delay: u32,
    pub spawn_delay_decrease: u32,

    // === Difficulty ===
    /// Ascending score thresholds
    pub milestones: Vec<Milestone>,

    // === Loop ===
    pub fps: u32,
    /// Hitbox shrink per side used by the collision oracle
    pub collision_inset: f32,
    /// RNG seed; `None` lets the binary pick one
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            road_width: ROAD_WIDTH,
            road_speed: ROAD_SPEED,
            road_line_height: ROAD_LINE_HEIGHT,
            road_line_gap: ROAD_LINE_GAP,

            player_width: PLAYER_CAR_WIDTH,
            player_height: PLAYER_CAR_HEIGHT,
            player_speed: PLAYER_CAR_SPEED,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            boost_duration_frames: BOOST_DURATION_FRAMES,
            boost_multiplier: BOOST_MULTIPLIER,

            obstacle_width: OBSTACLE_CAR_WIDTH,
            obstacle_height: OBSTACLE_CAR_HEIGHT,
            obstacle_speed: OBSTACLE_CAR_SPEED,
            initial_spawn_delay: INITIAL_SPAWN_DELAY,
            min_spawn_delay: MIN_SPAWN_DELAY,
            spawn_delay_decrease: SPAWN_DELAY_DECREASE,

            milestones: SCORE_MILESTONES
                .iter()
                .map(|&score| Milestone {
                    score,
                    speed_increase: SPEED_INCREASE_PER_MILESTONE,
                })
                .collect(),

            fps: FPS,
            collision_inset: COLLISION_INSET,
            seed: None,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl GameConfig {
    /// Parse a JSON config (missing fields take defaults) and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject any configuration the frame loop can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("road_width", self.road_width)?;
        positive("road_speed", self.road_speed)?;
        positive("road_line_height", self.road_line_height)?;
        positive("road_line_gap", self.road_line_gap)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("player_speed", self.player_speed)?;
        positive("obstacle_width", self.obstacle_width)?;
        positive("obstacle_height", self.obstacle_height)?;
        positive("obstacle_speed", self.obstacle_speed)?;

        if !(self.player_bottom_margin.is_finite() && self.player_bottom_margin >= 0.0) {
            return Err(ConfigError::NonPositive {
                field: "player_bottom_margin",
                value: self.player_bottom_margin,
            });
        }

        if self.fps == 0 {
            return Err(ConfigError::Zero { field: "fps" });
        }
        if self.boost_duration_frames == 0 {
            return Err(ConfigError::Zero {
                field: "boost_duration_frames",
            });
        }
        if self.initial_spawn_delay == 0 {
            return Err(ConfigError::Zero {
                field: "initial_spawn_delay",
            });
        }
        if self.min_spawn_delay == 0 {
            return Err(ConfigError::Zero {
                field: "min_spawn_delay",
            });
        }
        if self.min_spawn_delay > self.initial_spawn_delay {
            return Err(ConfigError::SpawnDelayRange {
                min: self.min_spawn_delay,
                initial: self.initial_spawn_delay,
            });
        }

        if self.road_width > self.screen_width {
            return Err(ConfigError::RoadWiderThanScreen {
                road: self.road_width,
                screen: self.screen_width,
            });
        }
        if self.player_width > self.road_width {
            return Err(ConfigError::CarWiderThanRoad {
                what: "player",
                width: self.player_width,
                road: self.road_width,
            });
        }
        if self.obstacle_width > self.road_width {
            return Err(ConfigError::CarWiderThanRoad {
                what: "obstacle",
                width: self.obstacle_width,
                road: self.road_width,
            });
        }
        if self.player_height + self.player_bottom_margin > self.screen_height {
            return Err(ConfigError::PlayerTallerThanScreen {
                height: self.player_height,
                margin: self.player_bottom_margin,
                screen: self.screen_height,
            });
        }

        if !(self.boost_multiplier.is_finite() && self.boost_multiplier >= 1.0) {
            return Err(ConfigError::BoostMultiplier(self.boost_multiplier));
        }

        for pair in self.milestones.windows(2) {
            if pair[1].score <= pair[0].score {
                return Err(ConfigError::MilestonesNotAscending {
                    prev: pair[0].score,
                    next: pair[1].score,
                });
            }
        }
        for m in &self.milestones {
            if !(m.speed_increase.is_finite() && m.speed_increase >= 0.0) {
                return Err(ConfigError::MilestoneIncrease {
                    score: m.score,
                    value: m.speed_increase,
                });
            }
        }

        let smallest = [
            self.player_width,
            self.player_height,
            self.obstacle_width,
            self.obstacle_height,
        ]
        .into_iter()
        .fold(f32::INFINITY, f32::min);
        if !(self.collision_inset.is_finite()
            && self.collision_inset >= 0.0
            && self.collision_inset * 2.0 < smallest)
        {
            return Err(ConfigError::CollisionInset {
                inset: self.collision_inset,
                width: self.player_width.min(self.obstacle_width),
                height: self.player_height.min(self.obstacle_height),
            });
        }

        Ok(())
    }

    /// Left and right road boundaries (road centered on screen)
    pub fn road_bounds(&self) -> (f32, f32) {
        let left = ((self.screen_width - self.road_width) / 2.0).floor();
        (left, left + self.road_width)
    }

    /// Player spawn point: horizontally centered, just above the bottom edge
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(
            (self.screen_width / 2.0 - self.player_width / 2.0).floor(),
            self.screen_height - self.player_height - self.player_bottom_margin,
        )
    }

    /// Length of one lane-marking cycle (dash + gap)
    pub fn road_period(&self) -> f32 {
        self.road_line_height + self.road_line_gap
    }

    /// Wall-clock duration of one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps.max(1)))
    }
}
