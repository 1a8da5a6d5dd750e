//! Entities and session bookkeeping
//!
//! Plain state holders with their per-frame `advance`/`move_down` operations.
//! Everything here is mutated only from the simulation step.

use glam::Vec2;

use super::collision::Rect;
use super::machine::GameState;
use crate::config::GameConfig;

/// The player's F1 car
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Lateral speed without boost (grows with difficulty)
    pub base_speed: f32,
    /// Lateral speed currently applied
    pub speed: f32,
    pub boost_active: bool,
    pub boost_frames: u32,
    initial_speed: f32,
    boost_duration: u32,
    boost_multiplier: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.player_start(),
            size: Vec2::new(config.player_width, config.player_height),
            base_speed: config.player_speed,
            speed: config.player_speed,
            boost_active: false,
            boost_frames: 0,
            initial_speed: config.player_speed,
            boost_duration: config.boost_duration_frames,
            boost_multiplier: config.boost_multiplier,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Center of the rear edge, where exhaust is emitted
    pub fn exhaust_point(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y + self.size.y)
    }

    pub fn move_left(&mut self, road_left: f32) {
        self.pos.x = (self.pos.x - self.speed).max(road_left);
    }

    pub fn move_right(&mut self, road_right: f32) {
        self.pos.x = (self.pos.x + self.speed).min(road_right - self.size.x);
    }

    /// Start (or restart) the boost window
    pub fn activate_boost(&mut self) {
        self.boost_active = true;
        self.boost_frames = self.boost_duration;
        self.speed = self.base_speed * self.boost_multiplier;
    }

    /// Count down the boost window; speed falls back to base when it ends
    pub fn advance(&mut self) {
        if self.boost_active {
            self.boost_frames = self.boost_frames.saturating_sub(1);
            if self.boost_frames == 0 {
                self.boost_active = false;
                self.speed = self.base_speed;
            }
        }
    }

    /// Permanent speed increase from a difficulty milestone
    pub fn increase_difficulty(&mut self, amount: f32) {
        self.base_speed += amount;
        if !self.boost_active {
            self.speed = self.base_speed;
        }
    }

    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.base_speed = self.initial_speed;
        self.speed = self.initial_speed;
        self.boost_active = false;
        self.boost_frames = 0;
    }
}

/// Visual category of an obstacle car (render-only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Sedan,
    Sports,
    Suv,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Sedan, ObstacleKind::Sports, ObstacleKind::Suv];
}

/// An obstacle car driving down the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed (px/frame)
    pub speed: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn move_down(&mut self) {
        self.pos.y += self.speed;
    }

    /// True once the top edge has passed the bottom of the screen
    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.pos.y > screen_height
    }

    pub fn increase_speed(&mut self, amount: f32) {
        self.speed += amount;
    }
}

/// Scrolling road surface
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    /// Lane-marking scroll offset, always in `[0, period)`
    pub offset: f32,
    pub speed: f32,
    pub left: f32,
    pub right: f32,
    period: f32,
    initial_speed: f32,
}

impl Road {
    pub fn new(config: &GameConfig) -> Self {
        let (left, right) = config.road_bounds();
        Self {
            offset: 0.0,
            speed: config.road_speed,
            left,
            right,
            period: config.road_period(),
            initial_speed: config.road_speed,
        }
    }

    pub fn advance(&mut self) {
        self.offset = (self.offset + self.speed).rem_euclid(self.period);
    }

    pub fn increase_speed(&mut self, amount: f32) {
        self.speed += amount;
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.left, self.right)
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.speed = self.initial_speed;
    }
}

/// Per-session counters, reset as one unit
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Obstacles that made it off the bottom of the screen
    pub score: u64,
    pub spawn_timer: u32,
    /// Frames between spawns (never below the configured minimum)
    pub spawn_delay: u32,
    /// Highest milestone threshold already applied
    pub last_milestone: Option<u64>,
    /// Score frozen at game over
    pub final_score: Option<u64>,
    /// Playing ticks simulated this session
    pub ticks: u64,
    next_obstacle_id: u32,
    initial_spawn_delay: u32,
}

impl Session {
    pub fn new(initial_spawn_delay: u32) -> Self {
        Self {
            score: 0,
            spawn_timer: 0,
            spawn_delay: initial_spawn_delay,
            last_milestone: None,
            final_score: None,
            ticks: 0,
            next_obstacle_id: 1,
            initial_spawn_delay,
        }
    }

    /// Allocate an obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_obstacle_id;
        self.next_obstacle_id += 1;
        id
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.initial_spawn_delay);
    }
}

/// Things that happened during a frame, drained by audio/HUD collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    StateChanged { from: GameState, to: GameState },
    ObstacleSpawned { id: u32 },
    ObstacleCleared { id: u32, score: u64 },
    BoostActivated,
    MilestoneReached { score: u64, speed_increase: f32 },
    Collision { obstacle_id: u32, point: Option<Vec2> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_clamped_to_road() {
        let config = GameConfig::default();
        let (left, right) = config.road_bounds();
        let mut player = Player::new(&config);

        for _ in 0..200 {
            player.move_left(left);
        }
        assert_eq!(player.pos.x, left);

        for _ in 0..200 {
            player.move_right(right);
        }
        assert_eq!(player.pos.x, right - player.size.x);
    }

    #[test]
    fn test_boost_expires_after_duration() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);

        player.activate_boost();
        assert!(player.boost_active);
        assert_eq!(player.boost_frames, 60);
        assert_eq!(player.speed, player.base_speed * 1.5);

        for frame in 1..60 {
            player.advance();
            assert!(player.boost_active, "boost ended early at frame {frame}");
            assert!(player.boost_frames > 0);
        }
        player.advance();
        assert!(!player.boost_active);
        assert_eq!(player.speed, player.base_speed);
    }

    #[test]
    fn test_difficulty_while_boosting_keeps_boost_speed() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.activate_boost();
        let boosted = player.speed;

        player.increase_difficulty(1.0);
        assert_eq!(player.base_speed, config.player_speed + 1.0);
        assert_eq!(player.speed, boosted);

        for _ in 0..60 {
            player.advance();
        }
        assert_eq!(player.speed, config.player_speed + 1.0);
    }

    #[test]
    fn test_player_reset_restores_initial_speed() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.increase_difficulty(3.0);
        player.activate_boost();
        player.pos.x = 0.0;

        player.reset(config.player_start());
        assert_eq!(player, Player::new(&config));
    }

    #[test]
    fn test_road_offset_wraps() {
        let config = GameConfig::default();
        let mut road = Road::new(&config);
        road.speed = 7.0;
        for _ in 0..1000 {
            road.advance();
            assert!(road.offset >= 0.0 && road.offset < road.period());
        }
    }

    #[test]
    fn test_obstacle_off_screen_uses_top_edge() {
        let mut obstacle = Obstacle {
            id: 1,
            pos: Vec2::new(300.0, 595.0),
            size: Vec2::new(50.0, 80.0),
            speed: 5.0,
            kind: ObstacleKind::Sedan,
        };
        assert!(!obstacle.is_off_screen(600.0));
        obstacle.move_down();
        assert!(!obstacle.is_off_screen(600.0));
        obstacle.move_down();
        assert!(obstacle.is_off_screen(600.0));
    }

    #[test]
    fn test_session_reset() {
        let mut session = Session::new(90);
        session.score = 12;
        session.spawn_delay = 40;
        session.last_milestone = Some(10);
        session.next_obstacle_id();

        session.reset();
        assert_eq!(session, Session::new(90));
    }
}
