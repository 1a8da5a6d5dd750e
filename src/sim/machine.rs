//! Game state machine
//!
//! Transitions are a pure function of `(state, trigger)`; the machine only
//! records the result. Side effects are reported back to the caller, which
//! owns the session they act on.

/// Top-level game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Main menu (initial state)
    Menu,
    /// Active gameplay
    Playing,
    /// Gameplay frozen, waiting for unpause
    Paused,
    /// Run ended by a collision
    GameOver,
}

/// Something that may cause a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Start button chosen in the menu
    Start,
    TogglePause,
    /// Return to the main menu
    Menu,
    /// Player hit an obstacle
    Collision,
    /// Start over from the game-over screen
    Restart,
}

/// Work the owner of the session must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Nothing,
    /// Reinitialize the whole session
    ResetSession,
    /// Stop the session and record its final score
    FreezeSession,
}

/// A transition that was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: GameState,
    pub to: GameState,
    pub effect: Effect,
}

impl GameState {
    /// Where `trigger` leads from this state, or `None` if it is ignored here
    pub fn next(self, trigger: Trigger) -> Option<(GameState, Effect)> {
        use GameState::*;

        match (self, trigger) {
            (Menu, Trigger::Start) => Some((Playing, Effect::ResetSession)),
            (Menu, Trigger::TogglePause | Trigger::Menu | Trigger::Collision | Trigger::Restart) => {
                None
            }

            (Playing, Trigger::TogglePause) => Some((Paused, Effect::Nothing)),
            (Playing, Trigger::Menu) => Some((Menu, Effect::Nothing)),
            (Playing, Trigger::Collision) => Some((GameOver, Effect::FreezeSession)),
            (Playing, Trigger::Start | Trigger::Restart) => None,

            (Paused, Trigger::TogglePause) => Some((Playing, Effect::Nothing)),
            (Paused, Trigger::Menu) => Some((Menu, Effect::Nothing)),
            (Paused, Trigger::Start | Trigger::Collision | Trigger::Restart) => None,

            (GameOver, Trigger::Restart) => Some((Playing, Effect::ResetSession)),
            (GameOver, Trigger::Menu) => Some((Menu, Effect::Nothing)),
            (GameOver, Trigger::Start | Trigger::TogglePause | Trigger::Collision) => None,
        }
    }
}

/// Owns the current state and the one it came from
#[derive(Debug, Clone)]
pub struct GameStateMachine {
    current: GameState,
    previous: Option<GameState>,
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateMachine {
    pub fn new() -> Self {
        Self {
            current: GameState::Menu,
            previous: None,
        }
    }

    pub fn current(&self) -> GameState {
        self.current
    }

    /// Previous state (diagnostics only)
    pub fn previous(&self) -> Option<GameState> {
        self.previous
    }

    pub fn is(&self, state: GameState) -> bool {
        self.current == state
    }

    /// Apply a trigger; returns the transition if one was taken
    pub fn fire(&mut self, trigger: Trigger) -> Option<Transition> {
        let from = self.current;
        let (to, effect) = from.next(trigger)?;
        self.previous = Some(from);
        self.current = to;
        Some(Transition { from, to, effect })
    }
}
