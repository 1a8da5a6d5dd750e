//! Input sources
//!
//! An input source is polled exactly once per frame, before the simulation
//! step, and returns that frame's discrete commands and held-key state.

use std::collections::VecDeque;

use crate::sim::{Command, FrameView, TickInput};

pub trait InputSource {
    fn poll(&mut self, view: &FrameView<'_>) -> TickInput;
}

/// Replays a fixed list of frames, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _view: &FrameView<'_>) -> TickInput {
        self.frames
            .pop_front()
            .unwrap_or_else(|| TickInput::command(Command::Quit))
    }
}
