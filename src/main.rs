//! F1 Dodge entry point
//!
//! Runs the game headless: the autopilot drives, frames and sound cues go to
//! the log. Usage: `f1-dodge [config.json]`

use std::time::{SystemTime, UNIX_EPOCH};

use f1_dodge::audio::LogAudio;
use f1_dodge::platform::{Autopilot, FrameLimiter, LogRenderer};
use f1_dodge::runner;
use f1_dodge::sim::Simulation;
use f1_dodge::{ConfigError, GameConfig};

/// Runs the autopilot plays before quitting
const DEMO_RUNS: u32 = 3;

fn main() {
    env_logger::init();
    log::info!("F1 Dodge (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => {
            let config = GameConfig::default();
            config.validate()?;
            config
        }
    };

    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("Seed {seed}");

    let mut limiter = FrameLimiter::new(config.frame_duration());
    let report_every = u64::from(config.fps);
    let mut sim = Simulation::new(config, seed)?;

    let summary = runner::run(
        &mut sim,
        &mut Autopilot::new(DEMO_RUNS),
        &mut LogRenderer::new(report_every),
        &mut LogAudio::new(),
        &mut limiter,
    );

    log::info!(
        "Played {} runs in {} frames, high score {}",
        summary.runs,
        summary.frames,
        summary.high_score
    );
    for (i, entry) in sim.highscores.entries.iter().enumerate() {
        log::info!("  #{} {} (run {})", i + 1, entry.score, entry.run);
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
