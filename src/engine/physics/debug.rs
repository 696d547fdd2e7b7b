use crate::core::Rect;
use crate::engine::renderer::{Color, RenderSurface};

const BODY_COLOR: Color = Color::rgb(0, 255, 0);
const HITBOX_OUTLINE: Color = Color::rgb(255, 64, 64);

/// Debug overlay for collision boxes
/// Outlines bodies and hitboxes, and fills hitboxes that can currently deal damage
#[derive(Debug, Default)]
pub struct DebugOverlay {
    enabled: bool,
}

impl DebugOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle debug rendering on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::info!(
            "Collision debug overlay: {}",
            if self.enabled { "ON" } else { "OFF" }
        );
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Draw one fighter's boxes
    pub fn draw(
        &self,
        surface: &mut dyn RenderSurface,
        body: Rect,
        hitbox: Rect,
        attacking: bool,
    ) {
        if !self.enabled {
            return;
        }

        surface.stroke_rect(body, BODY_COLOR, 2.0);
        if attacking {
            surface.fill_rect(hitbox, Color::rgba(255, 0, 0, 0.4));
        }
        surface.stroke_rect(hitbox, HITBOX_OUTLINE, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::surface::testing::{DrawCall, RecordingSurface};

    fn fills(surface: &RecordingSurface) -> usize {
        surface
            .calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Fill(..)))
            .count()
    }

    #[test]
    fn test_disabled_overlay_draws_nothing() {
        let overlay = DebugOverlay::new();
        let mut surface = RecordingSurface::new();
        overlay.draw(
            &mut surface,
            Rect::new(0.0, 0.0, 50.0, 150.0),
            Rect::new(100.0, 50.0, 150.0, 50.0),
            true,
        );
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_attacking_hitbox_is_filled() {
        let mut overlay = DebugOverlay::new();
        overlay.toggle();
        assert!(overlay.is_enabled());

        let body = Rect::new(0.0, 0.0, 50.0, 150.0);
        let hitbox = Rect::new(100.0, 50.0, 150.0, 50.0);

        let mut idle = RecordingSurface::new();
        overlay.draw(&mut idle, body, hitbox, false);
        let mut attacking = RecordingSurface::new();
        overlay.draw(&mut attacking, body, hitbox, true);

        // Two outlines of four edges each, plus the hitbox fill
        assert_eq!(fills(&idle), 8);
        assert_eq!(fills(&attacking), 9);
    }
}
