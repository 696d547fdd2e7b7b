// Kinematic fighter body: per-tick velocity integration with a flat floor

use crate::core::Rect;
use glam::Vec2;

/// Axis-aligned body moved by explicit velocity and a constant gravity
///
/// Units are stage pixels and pixels per tick; +y points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity,
            size,
        }
    }

    /// Apply one tick of motion against the floor at `ground_y`
    ///
    /// Moves by the current velocity, then either lands (velocity.y = 0,
    /// bottom edge snapped to the floor) if the next vertical step would
    /// reach the floor, or accelerates downward by `gravity`. Returns whether
    /// the body is on the floor after the step.
    pub fn integrate(&mut self, gravity: f32, ground_y: f32) -> bool {
        self.position += self.velocity;

        if self.position.y + self.size.y + self.velocity.y >= ground_y {
            self.velocity.y = 0.0;
            self.position.y = ground_y - self.size.y;
            true
        } else {
            self.velocity.y += gravity;
            false
        }
    }

    /// The body box in stage space
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    pub fn is_rising(&self) -> bool {
        self.velocity.y < 0.0
    }

    pub fn is_falling(&self) -> bool {
        self.velocity.y > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const GROUND: f32 = 480.0;
    const GRAVITY: f32 = 0.7;

    fn body_at(y: f32, vy: f32) -> Body {
        Body::new(Vec2::new(100.0, y), Vec2::new(0.0, vy), Vec2::new(50.0, 150.0))
    }

    #[test]
    fn test_airborne_body_accelerates_down() {
        let mut body = body_at(0.0, 0.0);
        assert!(!body.integrate(GRAVITY, GROUND));
        assert_relative_eq!(body.velocity.y, 0.7);

        body.integrate(GRAVITY, GROUND);
        assert_relative_eq!(body.position.y, 0.7);
        assert_relative_eq!(body.velocity.y, 1.4);
    }

    #[test]
    fn test_landing_snaps_to_ground() {
        let mut body = body_at(300.0, 20.0);
        assert!(body.integrate(GRAVITY, GROUND));

        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.position.y + body.size.y, GROUND);
    }

    #[test]
    fn test_falling_body_always_lands_exactly() {
        let mut body = body_at(0.0, 20.0);
        let mut landed = false;
        for _ in 0..200 {
            if body.integrate(GRAVITY, GROUND) {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.rect().bottom(), GROUND);
    }

    #[test]
    fn test_resting_body_stays_put() {
        let mut body = body_at(GROUND - 150.0, 0.0);
        for _ in 0..10 {
            assert!(body.integrate(GRAVITY, GROUND));
        }
        assert_eq!(body.position.y, GROUND - 150.0);
    }

    #[test]
    fn test_horizontal_velocity_applied() {
        let mut body = body_at(GROUND - 150.0, 0.0);
        body.velocity.x = -5.0;
        body.integrate(GRAVITY, GROUND);
        assert_eq!(body.position.x, 95.0);
    }

    #[test]
    fn test_jump_rises_then_falls() {
        let mut body = body_at(GROUND - 150.0, -20.0);
        assert!(body.is_rising());
        body.integrate(GRAVITY, GROUND);
        assert!(body.position.y < GROUND - 150.0);

        for _ in 0..30 {
            body.integrate(GRAVITY, GROUND);
        }
        assert!(body.is_falling());
    }
}
