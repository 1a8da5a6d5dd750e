//! User interface collaborators
//!
//! Widgets here only translate pointer input into actions for the core;
//! drawing them is left to the renderer.

pub mod menu;

pub use menu::{Button, MainMenu, MenuAction};
