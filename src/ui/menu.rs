//! Main menu
//!
//! Start / Instructions / Quit buttons stacked in the middle of the screen.

use glam::Vec2;

use crate::sim::collision::Rect;

/// What a click on the menu asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Quit,
    None,
}

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_SPACING: f32 = 70.0;

/// A clickable menu button
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
}

impl Button {
    fn new(center_x: f32, top: f32, label: &'static str) -> Self {
        Self {
            rect: Rect::from_xywh(center_x - BUTTON_WIDTH / 2.0, top, BUTTON_WIDTH, BUTTON_HEIGHT),
            label,
        }
    }

    pub fn is_hovered(&self, pointer: Vec2) -> bool {
        self.rect.contains_point(pointer)
    }
}

#[derive(Debug, Clone)]
pub struct MainMenu {
    pub start: Button,
    pub instructions: Button,
    pub quit: Button,
    /// Instructions overlay visible; the next click only closes it
    pub show_instructions: bool,
}

impl MainMenu {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let center_x = screen_width / 2.0;
        let top = screen_height / 2.0;
        Self {
            start: Button::new(center_x, top, "START RACE"),
            instructions: Button::new(center_x, top + BUTTON_SPACING, "INSTRUCTIONS"),
            quit: Button::new(center_x, top + 2.0 * BUTTON_SPACING, "QUIT"),
            show_instructions: false,
        }
    }

    pub fn buttons(&self) -> [&Button; 3] {
        [&self.start, &self.instructions, &self.quit]
    }

    /// Resolve a primary-button click at `pointer`
    pub fn handle_click(&mut self, pointer: Vec2) -> MenuAction {
        if self.show_instructions {
            self.show_instructions = false;
            return MenuAction::None;
        }

        if self.start.is_hovered(pointer) {
            MenuAction::Start
        } else if self.instructions.is_hovered(pointer) {
            self.show_instructions = true;
            MenuAction::None
        } else if self.quit.is_hovered(pointer) {
            MenuAction::Quit
        } else {
            MenuAction::None
        }
    }
}
