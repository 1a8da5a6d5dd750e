//! Sound cues
//!
//! Playback itself belongs to the platform; this module decides which cue a
//! game event deserves and defines the sink that plays it.

use crate::sim::{GameEvent, GameState};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Obstacle dodged
    Score,
    /// Player crashed
    Collision,
    /// Boost engaged
    Boost,
    /// Difficulty milestone crossed
    SpeedUp,
    /// Race started or restarted
    Start,
}

impl SoundEffect {
    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ObstacleCleared { .. } => Some(SoundEffect::Score),
            GameEvent::Collision { .. } => Some(SoundEffect::Collision),
            GameEvent::BoostActivated => Some(SoundEffect::Boost),
            GameEvent::MilestoneReached { .. } => Some(SoundEffect::SpeedUp),
            GameEvent::StateChanged {
                from: GameState::Menu | GameState::GameOver,
                to: GameState::Playing,
            } => Some(SoundEffect::Start),
            GameEvent::StateChanged { .. } | GameEvent::ObstacleSpawned { .. } => None,
        }
    }
}

/// Plays sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio sink for headless runs: logs each cue
#[derive(Debug, Default)]
pub struct LogAudio {
    pub muted: bool,
    played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far (muted cues aren't counted)
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::trace!("Sound: {effect:?}");
    }
}
