//! Headless presentation
//!
//! Stands in for a window: instead of drawing, it logs what a player would
//! have seen.

use glam::Vec2;

use crate::runner::Renderer;
use crate::sim::{FrameView, GameState, ParticleCanvas};

/// Counts particles instead of painting them
#[derive(Debug, Default)]
struct CountingCanvas {
    count: usize,
}

impl ParticleCanvas for CountingCanvas {
    fn circle(&mut self, _center: Vec2, _radius: f32, _color: [u8; 3], _alpha: f32) {
        self.count += 1;
    }
}

#[derive(Debug)]
pub struct LogRenderer {
    /// Log a status line every this many frames while playing
    report_every: u64,
    frames: u64,
    last_state: Option<GameState>,
    /// Particles drawn in the most recent frame
    pub particles_drawn: usize,
}

impl LogRenderer {
    pub fn new(report_every: u64) -> Self {
        Self {
            report_every: report_every.max(1),
            frames: 0,
            last_state: None,
            particles_drawn: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        self.frames += 1;

        let mut canvas = CountingCanvas::default();
        view.particles.draw(&mut canvas);
        self.particles_drawn = canvas.count;

        if self.last_state != Some(view.state) {
            match view.state {
                GameState::Menu => {
                    let labels: Vec<&str> = view.menu.buttons().iter().map(|b| b.label).collect();
                    log::info!("[menu] {} | high score {}", labels.join(" / "), view.high_score);
                }
                GameState::Playing => log::info!("[race] go!"),
                GameState::Paused => log::info!("[paused] score {}", view.session.score),
                GameState::GameOver => log::info!(
                    "[game over] score {} / high score {}",
                    view.session.score,
                    view.high_score
                ),
            }
            self.last_state = Some(view.state);
        }

        if view.state == GameState::Playing && self.frames % self.report_every == 0 {
            log::debug!(
                "score {} speed {:.1}{} obstacles {} particles {}",
                view.session.score,
                view.player.speed,
                if view.player.boost_active { " (boost)" } else { "" },
                view.obstacles.len(),
                self.particles_drawn
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{ParticleSystem, Simulation};

    #[test]
    fn test_counts_drawn_particles_in_every_state() {
        let mut sim = Simulation::new(GameConfig::default(), 4).unwrap();
        let mut renderer = LogRenderer::new(1);

        renderer.render(&sim.view());
        assert_eq!(renderer.particles_drawn, 0);
        assert_eq!(renderer.last_state, Some(GameState::Menu));

        sim.particles.emit_collision_sparks(Vec2::new(400.0, 300.0));
        renderer.render(&sim.view());
        assert_eq!(renderer.particles_drawn, sim.particles.len());
        assert_eq!(renderer.frames(), 2);
    }
}
