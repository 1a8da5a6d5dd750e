//! Demo driver
//!
//! Plays the game without a human: clicks Start, swerves away from the car
//! most likely to hit it, restarts after a crash, and quits after a fixed
//! number of runs.

use crate::sim::{Command, FrameView, GameState, HeldKeys, Obstacle, Rect, TickInput};

use super::input::InputSource;

/// How far above the player (px) an obstacle starts to matter
const LOOKAHEAD: f32 = 220.0;
/// Extra clearance kept on each side when deciding who's a threat
const MARGIN: f32 = 12.0;
/// Boost when a threat's bottom edge is this close
const PANIC_DISTANCE: f32 = 90.0;
/// Frames spent on the game-over screen before restarting
const RESTART_DELAY: u32 = 90;

#[derive(Debug, Clone)]
pub struct Autopilot {
    max_runs: u32,
    runs: u32,
    game_over_frames: u32,
}

impl Autopilot {
    pub fn new(max_runs: u32) -> Self {
        Self {
            max_runs: max_runs.max(1),
            runs: 0,
            game_over_frames: 0,
        }
    }

    /// Runs that ended in a crash so far
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Nearest obstacle in the player's path
    fn threat<'a>(player: &Rect, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
        let (min, max) = (player.min(), player.max());
        obstacles
            .iter()
            .filter(|o| {
                let r = o.rect();
                r.max().y > min.y - LOOKAHEAD
                    && r.min().y < max.y
                    && r.max().x > min.x - MARGIN
                    && r.min().x < max.x + MARGIN
            })
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    }

    fn drive(&self, view: &FrameView<'_>) -> TickInput {
        let player = view.player.rect();
        let Some(threat) = Self::threat(&player, view.obstacles) else {
            return TickInput::default();
        };

        let (left, right) = view.road.bounds();
        let room_left = player.min().x - left;
        let room_right = right - player.max().x;
        let threat_rect = threat.rect();

        // Shift needed to clear the threat on either side
        let clear_left = player.max().x - threat_rect.min().x + MARGIN;
        let clear_right = threat_rect.max().x - player.min().x + MARGIN;

        let go_left = if threat_rect.center().x >= player.center().x {
            room_left >= clear_left || room_right < clear_right
        } else {
            !(room_right >= clear_right || room_left < clear_left)
        };

        let mut input = TickInput::held(HeldKeys {
            left: go_left,
            right: !go_left,
        });

        let gap = player.min().y - threat_rect.max().y;
        if gap < PANIC_DISTANCE && !view.player.boost_active {
            input.commands.push(Command::BoostOrRestart);
        }
        input
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, view: &FrameView<'_>) -> TickInput {
        if view.state == GameState::GameOver {
            self.game_over_frames += 1;
            if self.game_over_frames == 1 {
                self.runs += 1;
                log::info!(
                    "Autopilot run {}/{} ended with score {}",
                    self.runs,
                    self.max_runs,
                    view.session.score
                );
            }
        } else {
            self.game_over_frames = 0;
        }

        match view.state {
            GameState::Menu if self.runs >= self.max_runs => TickInput::command(Command::Quit),
            GameState::Menu => TickInput::command(Command::Click(view.menu.start.rect.center())),
            GameState::Paused => TickInput::command(Command::TogglePause),
            GameState::GameOver if self.game_over_frames < RESTART_DELAY => TickInput::default(),
            GameState::GameOver if self.runs >= self.max_runs => TickInput::command(Command::Quit),
            GameState::GameOver => TickInput::command(Command::BoostOrRestart),
            GameState::Playing => self.drive(view),
        }
    }
}
