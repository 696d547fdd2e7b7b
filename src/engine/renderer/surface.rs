// 2D drawing capability the gameplay code renders through

use crate::core::Rect;
use crate::engine::assets::ImageRef;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with a fractional alpha in `[0, 1]`
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A 2D drawing target
///
/// Images are referenced, never owned: the surface resolves `ImageRef`
/// handles against whatever asset store backs it. Drawing an image the
/// backing store does not know is silently skipped.
pub trait RenderSurface {
    /// Reset `region` to fully transparent
    fn clear(&mut self, region: Rect);

    /// Alpha-blend `color` over `region`
    fn fill_rect(&mut self, region: Rect, color: Color);

    /// Copy the `src` sub-rectangle of `image` into `dst`, scaling to fit
    fn draw_image(&mut self, image: ImageRef, src: Rect, dst: Rect);

    /// Outline `region` with lines `thickness` pixels wide
    fn stroke_rect(&mut self, region: Rect, color: Color, thickness: f32) {
        let t = thickness.min(region.width / 2.0).min(region.height / 2.0).max(0.0);
        self.fill_rect(Rect::new(region.x, region.y, region.width, t), color);
        self.fill_rect(
            Rect::new(region.x, region.bottom() - t, region.width, t),
            color,
        );
        self.fill_rect(
            Rect::new(region.x, region.y + t, t, region.height - 2.0 * t),
            color,
        );
        self.fill_rect(
            Rect::new(region.right() - t, region.y + t, t, region.height - 2.0 * t),
            color,
        );
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{DrawCall, RecordingSurface};
    use super::*;

    #[test]
    fn test_rgba_alpha_conversion() {
        assert_eq!(Color::rgba(255, 255, 255, 0.15).a, 38);
        assert_eq!(Color::rgba(0, 0, 0, 2.0).a, 255);
        assert_eq!(Color::rgb(1, 2, 3).to_array(), [1, 2, 3, 255]);
    }

    #[test]
    fn test_stroke_rect_draws_four_edges() {
        let mut surface = RecordingSurface::new();
        surface.stroke_rect(Rect::new(0.0, 0.0, 10.0, 20.0), Color::WHITE, 2.0);

        let fills: Vec<Rect> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Fill(rect, _) => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![
                Rect::new(0.0, 0.0, 10.0, 2.0),
                Rect::new(0.0, 18.0, 10.0, 2.0),
                Rect::new(0.0, 2.0, 2.0, 16.0),
                Rect::new(8.0, 2.0, 2.0, 16.0),
            ]
        );
    }
}
