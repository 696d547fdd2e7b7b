// Fighter physics: bodies, hitboxes and collision debug drawing

pub mod body;
pub mod collision;
mod debug;

pub use body::Body;
pub use collision::{overlaps, Hitbox};
pub use debug::DebugOverlay;
