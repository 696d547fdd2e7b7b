// Rectangle overlap tests and attack hitboxes

use crate::core::Rect;
use glam::Vec2;
use parry2d::bounding_volume::{Aabb, BoundingVolume};
use parry2d::math::Point;

fn to_aabb(rect: &Rect) -> Aabb {
    Aabb::new(
        Point::new(rect.left(), rect.top()),
        Point::new(rect.right(), rect.bottom()),
    )
}

/// Whether two rectangles overlap, edges included
///
/// Touching edges count as contact.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    to_aabb(a).intersects(&to_aabb(b))
}

/// Attack area that follows its owner at a fixed offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub position: Vec2,
    pub offset: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn new(offset: Vec2, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            offset,
            width,
            height,
        }
    }

    /// Re-anchor to the owner's position
    pub fn follow(&mut self, owner: Vec2) {
        self.position = owner + self.offset;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }
}
