// Software framebuffer the game draws into each tick

use super::surface::{Color, RenderSurface};
use crate::core::math::clamp;
use crate::core::Rect;
use crate::engine::assets::{AssetManager, ImageRef};
use image::{Pixel, Rgba, RgbaImage};
use std::ops::Range;

/// RGBA framebuffer sized to the stage
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width.max(1), height.max(1)),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Raw RGBA8 bytes, row-major, for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Borrow the canvas as a drawable surface backed by `assets`
    pub fn frame<'a>(&'a mut self, assets: &'a AssetManager) -> CanvasFrame<'a> {
        CanvasFrame {
            canvas: self,
            assets,
        }
    }

    /// Pixel columns (or rows) covered by a span, clipped to `[0, limit)`
    fn span(start: f32, len: f32, limit: u32) -> Range<u32> {
        let first = clamp(start.round(), 0.0, limit as f32) as u32;
        let last = clamp((start + len).round(), 0.0, limit as f32) as u32;
        first..last.max(first)
    }

    fn clear_rect(&mut self, region: Rect) {
        for y in Self::span(region.y, region.height, self.height()) {
            for x in Self::span(region.x, region.width, self.width()) {
                self.pixels.put_pixel(x, y, Rgba(Color::TRANSPARENT.to_array()));
            }
        }
    }

    fn fill(&mut self, region: Rect, color: Color) {
        let src = Rgba(color.to_array());
        for y in Self::span(region.y, region.height, self.height()) {
            for x in Self::span(region.x, region.width, self.width()) {
                self.pixels.get_pixel_mut(x, y).blend(&src);
            }
        }
    }

    fn blit(&mut self, source: &RgbaImage, src: Rect, dst: Rect) {
        if dst.width <= 0.0 || dst.height <= 0.0 || src.width <= 0.0 || src.height <= 0.0 {
            return;
        }

        let max_x = source.width().saturating_sub(1) as f32;
        let max_y = source.height().saturating_sub(1) as f32;

        for y in Self::span(dst.y, dst.height, self.height()) {
            let v = (y as f32 + 0.5 - dst.y) / dst.height;
            let sy = clamp((src.y + v * src.height).floor(), 0.0, max_y) as u32;

            for x in Self::span(dst.x, dst.width, self.width()) {
                let u = (x as f32 + 0.5 - dst.x) / dst.width;
                let sx = clamp((src.x + u * src.width).floor(), 0.0, max_x) as u32;

                let texel = source.get_pixel(sx, sy);
                self.pixels.get_pixel_mut(x, y).blend(texel);
            }
        }
    }
}

/// A canvas paired with the asset store its image handles resolve against
pub struct CanvasFrame<'a> {
    canvas: &'a mut Canvas,
    assets: &'a AssetManager,
}

impl RenderSurface for CanvasFrame<'_> {
    fn clear(&mut self, region: Rect) {
        self.canvas.clear_rect(region);
    }

    fn fill_rect(&mut self, region: Rect, color: Color) {
        self.canvas.fill(region, color);
    }

    fn draw_image(&mut self, image: ImageRef, src: Rect, dst: Rect) {
        if let Some(source) = self.assets.get_image(image.handle) {
            self.canvas.blit(source, src, dst);
        }
    }
}
