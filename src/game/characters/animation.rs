// Per-character sprite-sheet table

use super::state::AnimState;
use crate::engine::assets::ImageRef;
use std::collections::HashMap;

/// One sprite sheet and how to play it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSpec {
    pub image: ImageRef,
    /// Number of frames laid out horizontally in the sheet
    pub frame_count: u32,
    /// Ticks each frame stays on screen
    pub frame_hold: u32,
}

impl SheetSpec {
    pub fn new(image: ImageRef, frame_count: u32, frame_hold: u32) -> Self {
        Self {
            image,
            frame_count,
            frame_hold,
        }
    }
}

/// Sheets for every animation state of one character
///
/// States without their own sheet play the idle sheet.
#[derive(Debug, Clone)]
pub struct AnimationTable {
    idle: SheetSpec,
    sheets: HashMap<AnimState, SheetSpec>,
}

impl AnimationTable {
    pub fn new(idle: SheetSpec) -> Self {
        Self {
            idle,
            sheets: HashMap::new(),
        }
    }

    /// Add (or replace) the sheet for `state`
    pub fn with(mut self, state: AnimState, sheet: SheetSpec) -> Self {
        if state == AnimState::Idle {
            self.idle = sheet;
        } else {
            self.sheets.insert(state, sheet);
        }
        self
    }

    pub fn sheet(&self, state: AnimState) -> SheetSpec {
        self.sheets.get(&state).copied().unwrap_or(self.idle)
    }

    /// Whether `state` has a sheet of its own
    pub fn has_sheet(&self, state: AnimState) -> bool {
        state == AnimState::Idle || self.sheets.contains_key(&state)
    }
}
