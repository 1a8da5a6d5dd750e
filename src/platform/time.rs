//! Frame pacing
//!
//! The only blocking call in the game: sleep until the next tick boundary.

use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame: Duration,
    next: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(frame: Duration) -> Self {
        Self { frame, next: None }
    }

    /// Never sleeps (tests, benchmarks)
    pub fn unthrottled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Block until the next tick boundary. The first call returns at once.
    ///
    /// A frame that overran by more than a whole tick restarts the schedule
    /// from now instead of bursting to catch up.
    pub fn wait(&mut self) {
        if self.frame.is_zero() {
            return;
        }

        let now = Instant::now();
        let target = self.next.unwrap_or(now);
        if target > now {
            thread::sleep(target - now);
        }

        let base = if now.saturating_duration_since(target) > self.frame {
            now
        } else {
            target
        };
        self.next = Some(base + self.frame);
    }
}
