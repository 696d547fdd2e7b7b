// Sprite-sheet animation

use super::surface::RenderSurface;
use crate::core::Rect;
use crate::engine::assets::ImageRef;
use glam::Vec2;

/// A sprite drawn from a horizontal strip of equally sized frames
///
/// Time is measured in ticks: the current frame is shown for `frame_hold`
/// ticks before the next one, wrapping after the last frame.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    /// Top-left draw origin in stage space
    pub position: Vec2,
    /// Post-scale size in pixels
    pub size: Vec2,
    /// Draw offset subtracted from `position`
    pub offset: Vec2,
    /// Uniform scale applied to the sheet when drawn
    pub scale: f32,
    image: ImageRef,
    frame_count: u32,
    current_frame: u32,
    frame_hold: u32,
    elapsed_ticks: u64,
}

impl AnimatedSprite {
    /// Create a sprite; `size` is given unscaled
    pub fn new(position: Vec2, size: Vec2, image: ImageRef) -> Self {
        Self {
            position,
            size,
            offset: Vec2::ZERO,
            scale: 1.0,
            image,
            frame_count: 1,
            current_frame: 0,
            frame_hold: 1,
            elapsed_ticks: 0,
        }
    }

    /// Set scale (also rescales `size`)
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.size *= scale / self.scale;
        self.scale = scale;
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Set frame count and hold (both clamped to at least 1)
    pub fn with_frames(mut self, frame_count: u32, frame_hold: u32) -> Self {
        self.frame_count = frame_count.max(1);
        self.frame_hold = frame_hold.max(1);
        self.current_frame = 0;
        self
    }

    /// Swap to a different sheet, restarting at its first frame
    ///
    /// The tick counter is left running.
    pub fn set_sheet(&mut self, image: ImageRef, frame_count: u32, frame_hold: u32) {
        self.image = image;
        self.frame_count = frame_count.max(1);
        self.frame_hold = frame_hold.max(1);
        self.current_frame = 0;
    }

    /// Count one tick; step to the next frame every `frame_hold` ticks
    pub fn advance_frame(&mut self) {
        self.elapsed_ticks += 1;
        if self.elapsed_ticks % self.frame_hold as u64 == 0 {
            self.current_frame = if self.current_frame >= self.frame_count - 1 {
                0
            } else {
                self.current_frame + 1
            };
        }
    }

    /// Sheet sub-rectangle of the current frame
    pub fn source_rect(&self) -> Rect {
        let frame_width = self.image.width as f32 / self.frame_count as f32;
        Rect::new(
            self.current_frame as f32 * frame_width,
            0.0,
            frame_width,
            self.image.height as f32,
        )
    }

    /// Where the current frame lands on the stage
    pub fn dest_rect(&self) -> Rect {
        let frame_width = self.image.width as f32 / self.frame_count as f32;
        Rect::new(
            self.position.x - self.offset.x,
            self.position.y - self.offset.y,
            frame_width * self.scale,
            self.image.height as f32 * self.scale,
        )
    }

    /// Draw the current frame
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        surface.draw_image(self.image, self.source_rect(), self.dest_rect());
    }

    /// Draw, then advance: frame N is visible for exactly `frame_hold` ticks
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) {
        self.render(surface);
        self.advance_frame();
    }

    pub fn image(&self) -> ImageRef {
        self.image
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn frame_hold(&self) -> u32 {
        self.frame_hold
    }

    /// Whether the current frame is the sheet's last one
    pub fn on_last_frame(&self) -> bool {
        self.current_frame == self.frame_count - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::{AssetHandle, AssetId};
    use crate::engine::renderer::surface::testing::RecordingSurface;

    fn sheet(width: u32, height: u32) -> ImageRef {
        ImageRef::new(AssetHandle::new(AssetId::from_u64(1)), width, height)
    }

    #[test]
    fn test_frame_advances_every_hold_ticks() {
        let mut sprite =
            AnimatedSprite::new(Vec2::ZERO, Vec2::ONE, sheet(600, 100)).with_frames(6, 5);

        for _ in 0..4 {
            sprite.advance_frame();
            assert_eq!(sprite.current_frame(), 0);
        }
        sprite.advance_frame();
        assert_eq!(sprite.current_frame(), 1);
    }

    #[test]
    fn test_frame_wraps_and_stays_in_range() {
        let mut sprite =
            AnimatedSprite::new(Vec2::ZERO, Vec2::ONE, sheet(300, 100)).with_frames(3, 2);

        let mut seen = Vec::new();
        for _ in 0..12 {
            sprite.advance_frame();
            assert!(sprite.current_frame() < sprite.frame_count());
            seen.push(sprite.current_frame());
        }
        assert_eq!(seen, vec![0, 1, 1, 2, 2, 0, 0, 1, 1, 2, 2, 0]);
    }

    #[test]
    fn test_single_frame_sheet_never_moves() {
        let mut sprite = AnimatedSprite::new(Vec2::ZERO, Vec2::ONE, sheet(1024, 576));
        for _ in 0..20 {
            sprite.advance_frame();
        }
        assert_eq!(sprite.current_frame(), 0);
    }

    #[test]
    fn test_zero_counts_are_clamped() {
        let sprite = AnimatedSprite::new(Vec2::ZERO, Vec2::ONE, sheet(10, 10)).with_frames(0, 0);
        assert_eq!(sprite.frame_count(), 1);
        assert_eq!(sprite.frame_hold(), 1);
    }

    #[test]
    fn test_render_uses_current_frame_offset_and_scale() {
        let mut sprite = AnimatedSprite::new(
            Vec2::new(600.0, 128.0),
            Vec2::new(118.0, 128.0),
            sheet(708, 128),
        )
        .with_frames(6, 1)
        .with_scale(2.0)
        .with_offset(Vec2::new(10.0, 20.0));
        sprite.advance_frame();

        let mut surface = RecordingSurface::new();
        sprite.render(&mut surface);

        let images = surface.images();
        assert_eq!(images.len(), 1);
        let (_, src, dst) = images[0];
        assert_eq!(src, Rect::new(118.0, 0.0, 118.0, 128.0));
        assert_eq!(dst, Rect::new(590.0, 108.0, 236.0, 256.0));
        assert_eq!(sprite.size, Vec2::new(236.0, 256.0));
    }

    #[test]
    fn test_tick_draws_before_advancing() {
        let mut sprite =
            AnimatedSprite::new(Vec2::ZERO, Vec2::ONE, sheet(200, 100)).with_frames(2, 1);
        let mut surface = RecordingSurface::new();

        sprite.tick(&mut surface);
        sprite.tick(&mut surface);

        let sources: Vec<f32> = surface.images().iter().map(|(_, src, _)| src.x).collect();
        assert_eq!(sources, vec![0.0, 100.0]);
        assert_eq!(sprite.current_frame(), 0);
    }

    #[test]
    fn test_set_sheet_restarts_at_first_frame() {
        let mut sprite =
            AnimatedSprite::new(Vec2::ZERO, Vec2::ONE, sheet(400, 100)).with_frames(4, 1);
        sprite.advance_frame();
        sprite.advance_frame();
        assert_eq!(sprite.current_frame(), 2);

        sprite.set_sheet(sheet(200, 100), 2, 3);
        assert_eq!(sprite.current_frame(), 0);
        assert_eq!(sprite.frame_count(), 2);
        assert_eq!(sprite.frame_hold(), 3);
    }
}
