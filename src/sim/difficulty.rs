//! Score-driven difficulty milestones
//!
//! Every frame the whole threshold list is scanned, so a score that jumps
//! past several thresholds at once still gets each of them, in order.

use super::state::{Obstacle, Player, Road, Session};
use crate::config::Milestone;

#[derive(Debug, Clone)]
pub struct DifficultyController {
    /// Ascending by score (validated with the config)
    milestones: Vec<Milestone>,
}

impl DifficultyController {
    pub fn new(milestones: Vec<Milestone>) -> Self {
        debug_assert!(milestones.windows(2).all(|w| w[0].score < w[1].score));
        Self { milestones }
    }

    /// Apply every newly crossed milestone; returns the ones applied this call
    pub fn apply(
        &self,
        session: &mut Session,
        player: &mut Player,
        road: &mut Road,
        obstacles: &mut [Obstacle],
    ) -> Vec<Milestone> {
        let mut applied = Vec::new();

        for milestone in &self.milestones {
            let threshold = milestone.score;
            let pending = session.last_milestone.is_none_or(|last| last < threshold);
            if session.score < threshold || !pending {
                continue;
            }

            player.increase_difficulty(milestone.speed_increase);
            road.increase_speed(milestone.speed_increase * 0.5);
            for obstacle in obstacles.iter_mut() {
                obstacle.increase_speed(milestone.speed_increase);
            }
            session.last_milestone = Some(threshold);

            log::info!("Difficulty increased at score {threshold}!");
            applied.push(*milestone);
        }

        applied
    }
}
