// Per-player control state

use super::action::Action;
use super::buffer::InputEvent;
use std::collections::HashSet;

/// Held controls of one fighter, rebuilt from queued events each tick
#[derive(Debug, Clone, Default)]
pub struct PlayerInput {
    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Most recently pressed horizontal direction
    last_horizontal: Option<Action>,
}

impl PlayerInput {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// The direction pressed last, held or not
    pub fn last_horizontal(&self) -> Option<Action> {
        self.last_horizontal
    }

    /// Fold one event into the held state
    ///
    /// Returns the action when the event is the press of an edge-triggered
    /// control (jump or attack), which the caller acts on immediately.
    pub fn apply(&mut self, event: InputEvent) -> Option<Action> {
        if event.pressed {
            self.pressed.insert(event.action);
            if event.action.is_horizontal() {
                self.last_horizontal = Some(event.action);
            }
            event.action.is_edge_triggered().then_some(event.action)
        } else {
            self.pressed.remove(&event.action);
            None
        }
    }

    /// Horizontal direction to move in: -1, 0 or 1
    ///
    /// Only the most recently pressed direction counts, and only while it is
    /// still held.
    pub fn horizontal_intent(&self) -> f32 {
        match self.last_horizontal {
            Some(Action::MoveLeft) if self.is_pressed(Action::MoveLeft) => -1.0,
            Some(Action::MoveRight) if self.is_pressed(Action::MoveRight) => 1.0,
            _ => 0.0,
        }
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.last_horizontal = None;
    }
}
