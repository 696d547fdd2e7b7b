// Character system
//
// This module contains everything related to the fighters:
// - Fighter entity (physics, input, combat)
// - Fighter stats
// - Animation states and their switching rules
// - Sprite-sheet tables and character presets

pub mod animation;
pub mod character;
pub mod roster;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationTable, SheetSpec};
pub use character::{Facing, Fighter};
pub use roster::{kenji, samurai_mack, FighterPreset};
pub use state::{locomotion_state, AnimState};
pub use stats::{FighterStats, BASE_STATS};
