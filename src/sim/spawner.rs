//! Obstacle spawning
//!
//! One obstacle per `spawn_delay` playing frames, with the delay shrinking
//! toward a floor after every spawn. Placement randomness comes from the
//! spawner's own seeded RNG so a seed reproduces a run exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Obstacle, ObstacleKind, Road, Session};
use crate::config::GameConfig;

#[derive(Debug, Clone)]
pub struct DifficultySpawner {
    rng: Pcg32,
    size: Vec2,
    speed: f32,
    min_delay: u32,
    decrement: u32,
}

impl DifficultySpawner {
    pub fn new(config: &GameConfig, rng: Pcg32) -> Self {
        Self {
            rng,
            size: Vec2::new(config.obstacle_width, config.obstacle_height),
            speed: config.obstacle_speed,
            min_delay: config.min_spawn_delay,
            decrement: config.spawn_delay_decrease,
        }
    }

    pub fn from_seed(config: &GameConfig, seed: u64) -> Self {
        Self::new(config, Pcg32::seed_from_u64(seed))
    }

    /// Advance the spawn timer by one frame; returns the new obstacle if the
    /// delay was reached
    pub fn tick(&mut self, session: &mut Session, road: &Road) -> Option<Obstacle> {
        session.spawn_timer += 1;
        if session.spawn_timer < session.spawn_delay {
            return None;
        }

        session.spawn_timer = 0;
        session.spawn_delay = session
            .spawn_delay
            .saturating_sub(self.decrement)
            .max(self.min_delay);

        Some(self.create(session.next_obstacle_id(), road))
    }

    /// New obstacle just above the top edge at a random spot on the road
    fn create(&mut self, id: u32, road: &Road) -> Obstacle {
        let (left, right) = road.bounds();
        let x = self.rng.random_range(left..=right - self.size.x);
        let kind = ObstacleKind::ALL[self.rng.random_range(0..ObstacleKind::ALL.len())];

        log::debug!("Spawned obstacle {id} ({kind:?}) at x={x:.0}");
        Obstacle {
            id,
            pos: Vec2::new(x, -self.size.y),
            size: self.size,
            speed: self.speed,
            kind,
        }
    }
}
