// Stage geometry and the decorative layers drawn behind the fighters

use crate::core::Rect;
use crate::engine::assets::{AssetManager, PlaceholderSpec};
use crate::engine::renderer::{AnimatedSprite, Color, RenderSurface};
use glam::Vec2;

/// Fixed playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub width: f32,
    pub height: f32,
    /// Height of the floor art at the bottom of the stage
    pub ground_margin: f32,
    /// Downward acceleration (px/tick²)
    pub gravity: f32,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 576.0,
            ground_margin: 96.0,
            gravity: 0.7,
        }
    }
}

impl Stage {
    /// The line fighters stand on
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_margin
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Background sprites plus the translucent wash drawn over them
#[derive(Debug, Clone, Default)]
pub struct Scenery {
    layers: Vec<AnimatedSprite>,
    wash: Option<Color>,
}

impl Scenery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Background and animated shop, or placeholder art when missing
    pub fn load(assets: &mut AssetManager, stage: &Stage) -> Self {
        let (width, height) = (stage.width as u32, stage.height as u32);
        let background = assets.load_or_placeholder(
            "background.png",
            &PlaceholderSpec {
                frame_width: width,
                frame_height: height,
                frames: 1,
                figure: Rect::new(0.0, stage.ground_y(), stage.width, stage.ground_margin),
                color: [72, 52, 40, 255],
            },
        );
        let shop = assets.load_or_placeholder(
            "shop.png",
            &PlaceholderSpec {
                frame_width: 118,
                frame_height: 128,
                frames: 6,
                figure: Rect::new(20.0, 40.0, 70.0, 88.0),
                color: [120, 90, 60, 255],
            },
        );

        Self::new()
            .with_layer(AnimatedSprite::new(
                Vec2::ZERO,
                Vec2::new(stage.width, stage.height),
                background,
            ))
            .with_layer(
                AnimatedSprite::new(Vec2::new(600.0, 128.0), Vec2::new(118.0, 128.0), shop)
                    .with_frames(6, 7)
                    .with_scale(2.75),
            )
            .with_wash(Color::rgba(255, 255, 255, 0.15))
    }

    pub fn with_layer(mut self, sprite: AnimatedSprite) -> Self {
        self.layers.push(sprite);
        self
    }

    pub fn with_wash(mut self, color: Color) -> Self {
        self.wash = Some(color);
        self
    }

    /// Draw and animate every layer, then the wash over the whole stage
    pub fn tick(&mut self, surface: &mut dyn RenderSurface, stage: &Stage) {
        for layer in &mut self.layers {
            layer.tick(surface);
        }
        if let Some(wash) = self.wash {
            surface.fill_rect(stage.bounds(), wash);
        }
    }

    pub fn layers(&self) -> &[AnimatedSprite] {
        &self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::surface::testing::{DrawCall, RecordingSurface};

    fn empty_assets() -> AssetManager {
        AssetManager::new(std::env::temp_dir().join("blade-duel-no-such-assets"))
    }

    #[test]
    fn test_default_stage() {
        let stage = Stage::default();
        assert_eq!(stage.ground_y(), 480.0);
        assert_eq!(stage.bounds(), Rect::new(0.0, 0.0, 1024.0, 576.0));
    }

    #[test]
    fn test_scenery_without_art() {
        let mut assets = empty_assets();
        let stage = Stage::default();
        let scenery = Scenery::load(&mut assets, &stage);

        let layers = scenery.layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].frame_count(), 1);
        assert_eq!(layers[1].frame_count(), 6);
        assert_eq!(layers[1].frame_hold(), 7);
        assert_eq!(layers[1].dest_rect().width, 118.0 * 2.75);
    }

    #[test]
    fn test_wash_drawn_after_layers() {
        let mut assets = empty_assets();
        let stage = Stage::default();
        let mut scenery = Scenery::load(&mut assets, &stage);

        let mut surface = RecordingSurface::new();
        scenery.tick(&mut surface, &stage);

        assert_eq!(surface.calls.len(), 3);
        assert!(matches!(surface.calls[0], DrawCall::Image { .. }));
        assert!(matches!(surface.calls[1], DrawCall::Image { .. }));
        assert_eq!(
            surface.calls[2],
            DrawCall::Fill(stage.bounds(), Color::rgba(255, 255, 255, 0.15))
        );
    }
}
