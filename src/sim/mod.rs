//! Simulation core
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Obstacles processed in creation order
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod machine;
pub mod particles;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionOracle, CollisionResult, PreciseCollision, Rect};
pub use difficulty::DifficultyController;
pub use machine::{Effect, GameState, GameStateMachine, Transition, Trigger};
pub use particles::{ParticleCanvas, ParticleSystem, Particles};
pub use spawner::DifficultySpawner;
pub use state::{GameEvent, Obstacle, ObstacleKind, Player, Road, Session};
pub use tick::{Command, FrameView, HeldKeys, Simulation, TickInput};
