// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Fighter controls
    MoveLeft,
    MoveRight,
    Jump,
    Attack,

    // Meta actions
    Restart,
    ToggleDebug,
}

impl Action {
    /// Left/right movement, resolved through the last-pressed direction
    pub fn is_horizontal(self) -> bool {
        matches!(self, Action::MoveLeft | Action::MoveRight)
    }

    /// Edge-triggered actions fire on press and ignore release
    pub fn is_edge_triggered(self) -> bool {
        matches!(self, Action::Jump | Action::Attack)
    }
}

/// Represents an input source (keyboard key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    // Future: Add controller support
    // GamepadButton(gilrs::Button),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings for Player 1
pub fn default_p1_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::Space), Action::Attack),
    ]
}

/// Default keyboard bindings for Player 2
pub fn default_p2_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::ArrowDown), Action::Attack),
    ]
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyR), Action::Restart),
        (InputSource::key(KeyCode::F1), Action::ToggleDebug),
    ]
}
