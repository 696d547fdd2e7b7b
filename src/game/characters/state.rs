// Fighter animation states and the rules for leaving them

/// Which sprite sheet a fighter is currently playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving horizontally on ground
    Run,
    /// In the air, moving upward
    Jump,
    /// In the air, moving downward
    Fall,
    /// Swinging; commits until the last frame
    Attack,
    /// Hit-stun; cannot act until the last frame
    Hit,
    /// Terminal
    Death,
}

impl AnimState {
    /// Get the animation name for this state
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
            Self::Jump => "jump",
            Self::Fall => "fall",
            Self::Attack => "attack",
            Self::Hit => "hit",
            Self::Death => "death",
        }
    }

    /// Whether this state refuses a requested switch
    ///
    /// Death never lets go. Hit and Attack hold until their sheet reaches its
    /// last frame. Every other state is open.
    pub fn holds(&self, on_last_frame: bool) -> bool {
        match self {
            Self::Death => true,
            Self::Hit | Self::Attack => !on_last_frame,
            _ => false,
        }
    }

    /// Check if the fighter may be steered by input in this state
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Self::Death)
    }
}

/// Movement state for a fighter that is free to move
///
/// Vertical motion outranks horizontal: rising shows Jump and falling shows
/// Fall even while running; only a grounded fighter shows Run or Idle.
pub fn locomotion_state(moving: bool, velocity_y: f32) -> AnimState {
    if velocity_y < 0.0 {
        AnimState::Jump
    } else if velocity_y > 0.0 {
        AnimState::Fall
    } else if moving {
        AnimState::Run
    } else {
        AnimState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        assert_eq!(AnimState::default(), AnimState::Idle);
    }

    #[test]
    fn test_death_always_holds() {
        assert!(AnimState::Death.holds(false));
        assert!(AnimState::Death.holds(true));
        assert!(!AnimState::Death.accepts_input());
    }

    #[test]
    fn test_commitments_release_on_last_frame() {
        for state in [AnimState::Hit, AnimState::Attack] {
            assert!(state.holds(false), "{} should hold", state.label());
            assert!(!state.holds(true), "{} should release", state.label());
            assert!(state.accepts_input());
        }
    }

    #[test]
    fn test_movement_states_never_hold() {
        for state in [AnimState::Idle, AnimState::Run, AnimState::Jump, AnimState::Fall] {
            assert!(!state.holds(false));
        }
    }

    #[test]
    fn test_vertical_motion_beats_horizontal() {
        assert_eq!(locomotion_state(true, -3.0), AnimState::Jump);
        assert_eq!(locomotion_state(true, 2.0), AnimState::Fall);
        assert_eq!(locomotion_state(false, -3.0), AnimState::Jump);
    }

    #[test]
    fn test_grounded_locomotion() {
        assert_eq!(locomotion_state(true, 0.0), AnimState::Run);
        assert_eq!(locomotion_state(false, 0.0), AnimState::Idle);
    }
}
