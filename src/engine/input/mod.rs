// Input handling system
//
// Keyboard events are mapped to logical actions per player and queued; the
// match drains each queue once per tick and folds the events into that
// fighter's `PlayerInput`.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `buffer`: Per-player event queue
// - `player`: Held-control state with last-pressed direction
// - `config`: Key binding tables and runtime remapping
// - `manager`: Routes window events, attach/detach per player

pub mod action;
pub mod buffer;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use buffer::{InputEvent, InputQueue};
pub use config::{BindError, BindingScope, InputConfig, InputConfigManager};
pub use manager::InputManager;
pub use player::PlayerInput;
