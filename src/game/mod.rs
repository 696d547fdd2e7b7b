// Game layer: fighters, stage, match rules and the status display

pub mod arena;
pub mod characters;
pub mod clock;
pub mod hud;
pub mod match_loop;

pub use arena::{Scenery, Stage};
pub use hud::{Hud, Outcome, PlayerSlot, StatusDisplay};
pub use match_loop::{MatchLoop, MatchSetup};
