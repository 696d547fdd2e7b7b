// Math utilities and helper types

use glam::Vec2;

/// Axis-aligned rectangle in stage pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its top-left corner and size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Same rectangle shifted by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }
}

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 50.0, 150.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 60.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 170.0);
    }

    #[test]
    fn test_rect_from_origin_size() {
        let rect = Rect::from_origin_size(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(rect.origin(), Vec2::new(1.0, 2.0));
        assert_eq!(rect.size(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_rect_translated() {
        let rect = Rect::new(0.0, 0.0, 5.0, 5.0).translated(Vec2::new(-2.0, 3.0));
        assert_eq!(rect, Rect::new(-2.0, 3.0, 5.0, 5.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(-30, 0, 100), 0);
    }
}
