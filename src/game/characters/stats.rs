// Fighter stats - both fighters share the same numbers
// Differentiation comes from sprite sheets, reach and attack timing

/// Fixed fighter stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FighterStats {
    // Movement
    /// Horizontal speed while a direction is held (px/tick)
    pub move_speed: f32,
    /// Upward velocity given by a jump (px/tick)
    pub jump_impulse: f32,

    // Combat
    /// Health removed by one landed hit
    pub hit_damage: i32,
    /// Starting health
    pub max_health: i32,

    // Dimensions (body box)
    pub width: f32,
    pub height: f32,
}

/// The stats used by every fighter
pub const BASE_STATS: FighterStats = FighterStats {
    move_speed: 5.0,
    jump_impulse: 20.0,

    hit_damage: 15,
    max_health: 100,

    width: 50.0,
    height: 150.0,
};

impl Default for FighterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = FighterStats::default();
        assert_eq!(stats.move_speed, 5.0);
        assert_eq!(stats.jump_impulse, 20.0);
        assert_eq!(stats.hit_damage, 15);
        assert_eq!(stats.max_health, 100);
    }

    #[test]
    fn test_seven_hits_knock_out() {
        let hits = (BASE_STATS.max_health + BASE_STATS.hit_damage - 1) / BASE_STATS.hit_damage;
        assert_eq!(hits, 7);
    }
}
