//! Fixed-rate frame loop
//!
//! Per frame, strictly in this order: wait for the tick boundary, poll input,
//! step the simulation, play the cues it produced, render.

use crate::audio::{AudioSink, SoundEffect};
use crate::platform::{FrameLimiter, InputSource};
use crate::sim::{CollisionOracle, FrameView, ParticleSystem, Simulation};

/// Draws a finished frame
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}

/// What a finished loop reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub high_score: u64,
    /// Runs that reached game over
    pub runs: u32,
}

/// Run until the input source (or the menu) asks to quit
///
/// Quit takes effect after the frame it arrived in has been fully simulated
/// and rendered.
pub fn run<P, C>(
    sim: &mut Simulation<P, C>,
    input: &mut impl InputSource,
    renderer: &mut impl Renderer,
    audio: &mut impl AudioSink,
    limiter: &mut FrameLimiter,
) -> RunSummary
where
    P: ParticleSystem,
    C: CollisionOracle,
{
    let mut frames = 0;
    log::info!("Frame loop started ({:?} per frame)", limiter.frame());

    loop {
        limiter.wait();

        let tick_input = input.poll(&sim.view());
        sim.frame(&tick_input);

        for event in sim.take_events() {
            if let Some(effect) = SoundEffect::for_event(&event) {
                audio.play(effect);
            }
        }

        renderer.render(&sim.view());
        frames += 1;

        if sim.quit_requested() {
            break;
        }
    }

    let summary = RunSummary {
        frames,
        high_score: sim.high_score(),
        runs: sim.highscores.runs(),
    };
    log::info!("Frame loop stopped after {} frames", summary.frames);
    summary
}
