//! Platform abstraction layer
//!
//! Everything that touches the outside world around the simulation:
//! - Frame pacing (`time`)
//! - Input sources (`input`, `autopilot`)
//! - Headless presentation (`headless`)

pub mod autopilot;
pub mod headless;
pub mod input;
pub mod time;

pub use autopilot::Autopilot;
pub use headless::LogRenderer;
pub use input::{InputSource, ScriptedInput};
pub use time::FrameLimiter;
