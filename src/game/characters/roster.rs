// Character presets: art, spawn point, reach and timing for each fighter

use super::animation::{AnimationTable, SheetSpec};
use super::character::Facing;
use super::state::AnimState;
use super::stats::{FighterStats, BASE_STATS};
use crate::core::Rect;
use crate::engine::assets::{AssetManager, PlaceholderSpec};
use glam::Vec2;

/// Size of one generated placeholder frame
const PLACEHOLDER_FRAME: u32 = 200;

/// Everything needed to build a fighter at match start
#[derive(Debug, Clone)]
pub struct FighterPreset {
    pub name: &'static str,
    pub sheets: AnimationTable,
    pub spawn_position: Vec2,
    pub spawn_velocity: Vec2,
    pub facing: Facing,
    /// Hitbox offset for a right-facing fighter; mirrored when facing left
    pub hitbox_offset: Vec2,
    pub hitbox_size: Vec2,
    pub sprite_scale: f32,
    pub sprite_offset: Vec2,
    /// Attack frame on which the swing connects or whiffs
    pub active_frame: u32,
    pub stats: FighterStats,
}

/// (state, file, frames, hold)
type SheetFile = (AnimState, &'static str, u32, u32);

const SAMURAI_MACK_SHEETS: [SheetFile; 7] = [
    (AnimState::Idle, "Idle.png", 8, 7),
    (AnimState::Run, "Run.png", 8, 7),
    (AnimState::Jump, "Jump.png", 2, 7),
    (AnimState::Fall, "Fall.png", 2, 7),
    (AnimState::Attack, "Attack1.png", 6, 5),
    (AnimState::Hit, "TakeHitWhite.png", 4, 5),
    (AnimState::Death, "Death.png", 6, 5),
];

const KENJI_SHEETS: [SheetFile; 7] = [
    (AnimState::Idle, "Idle.png", 4, 10),
    (AnimState::Run, "Run.png", 8, 7),
    (AnimState::Jump, "Jump.png", 2, 10),
    (AnimState::Fall, "Fall.png", 2, 10),
    (AnimState::Attack, "Attack1.png", 4, 10),
    (AnimState::Hit, "TakeHit.png", 3, 5),
    (AnimState::Death, "Death.png", 7, 5),
];

/// Player one's fighter
pub fn samurai_mack(assets: &mut AssetManager) -> FighterPreset {
    let sprite_scale = 2.5;
    let sprite_offset = Vec2::new(215.0, 152.0);

    FighterPreset {
        name: "Samurai Mack",
        sheets: load_sheets(
            assets,
            "samuraiMack",
            &SAMURAI_MACK_SHEETS,
            figure_in_frame(sprite_offset, sprite_scale),
            [70, 110, 230, 255],
        ),
        spawn_position: Vec2::new(200.0, 0.0),
        spawn_velocity: Vec2::new(0.0, 20.0),
        facing: Facing::Right,
        hitbox_offset: Vec2::new(100.0, 50.0),
        hitbox_size: Vec2::new(150.0, 50.0),
        sprite_scale,
        sprite_offset,
        active_frame: 4,
        stats: BASE_STATS,
    }
}

/// Player two's fighter
pub fn kenji(assets: &mut AssetManager) -> FighterPreset {
    let sprite_scale = 2.5;
    let sprite_offset = Vec2::new(215.0, 167.0);

    FighterPreset {
        name: "Kenji",
        sheets: load_sheets(
            assets,
            "kenji",
            &KENJI_SHEETS,
            figure_in_frame(sprite_offset, sprite_scale),
            [220, 70, 70, 255],
        ),
        spawn_position: Vec2::new(800.0, 20.0),
        spawn_velocity: Vec2::new(0.0, 20.0),
        facing: Facing::Left,
        hitbox_offset: Vec2::new(170.0, 50.0),
        hitbox_size: Vec2::new(150.0, 50.0),
        sprite_scale,
        sprite_offset,
        active_frame: 2,
        stats: BASE_STATS,
    }
}

/// Where the body box lands inside one unscaled sheet frame
fn figure_in_frame(sprite_offset: Vec2, sprite_scale: f32) -> Rect {
    Rect::new(
        (sprite_offset.x / sprite_scale).round(),
        (sprite_offset.y / sprite_scale).round(),
        (BASE_STATS.width / sprite_scale).round(),
        (BASE_STATS.height / sprite_scale).round(),
    )
}

fn load_sheets(
    assets: &mut AssetManager,
    dir: &str,
    files: &[SheetFile],
    figure: Rect,
    color: [u8; 4],
) -> AnimationTable {
    let mut load = |&(state, file, frames, hold): &SheetFile| {
        let placeholder = PlaceholderSpec {
            frame_width: PLACEHOLDER_FRAME,
            frame_height: PLACEHOLDER_FRAME,
            frames,
            figure,
            color: tint(color, state),
        };
        let image = assets.load_or_placeholder(&format!("{}/{}", dir, file), &placeholder);
        (state, SheetSpec::new(image, frames, hold))
    };

    let (_, idle) = load(&files[0]);
    files[1..].iter().map(load).fold(
        AnimationTable::new(idle),
        |table, (state, sheet)| table.with(state, sheet),
    )
}

/// Shade placeholder art per state so state changes stay visible
fn tint(color: [u8; 4], state: AnimState) -> [u8; 4] {
    let [r, g, b, a] = color;
    match state {
        AnimState::Attack => [
            r.saturating_add(35),
            g.saturating_add(35),
            b.saturating_add(35),
            a,
        ],
        AnimState::Hit => [255, 255, 255, a],
        AnimState::Death => [r / 2, g / 2, b / 2, a],
        _ => color,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn empty_assets() -> AssetManager {
        AssetManager::new(env::temp_dir().join("blade-duel-no-such-assets"))
    }

    #[test]
    fn test_reference_presets_without_art() {
        let mut assets = empty_assets();
        let mack = samurai_mack(&mut assets);
        let kenji = kenji(&mut assets);

        assert_eq!(mack.facing, Facing::Right);
        assert_eq!(kenji.facing, Facing::Left);
        assert_eq!(mack.active_frame, 4);
        assert_eq!(kenji.active_frame, 2);
        assert_eq!(mack.spawn_velocity, Vec2::new(0.0, 20.0));

        let attack = mack.sheets.sheet(AnimState::Attack);
        assert_eq!((attack.frame_count, attack.frame_hold), (6, 5));
        assert_eq!(attack.image.width, PLACEHOLDER_FRAME * 6);

        let death = kenji.sheets.sheet(AnimState::Death);
        assert_eq!((death.frame_count, death.frame_hold), (7, 5));
        let idle = kenji.sheets.sheet(AnimState::Idle);
        assert_eq!((idle.frame_count, idle.frame_hold), (4, 10));
    }

    #[test]
    fn test_every_state_has_a_sheet() {
        let mut assets = empty_assets();
        let preset = samurai_mack(&mut assets);
        for (state, ..) in SAMURAI_MACK_SHEETS {
            assert!(preset.sheets.has_sheet(state), "missing {}", state.label());
        }
    }

    #[test]
    fn test_placeholder_figure_matches_body() {
        let figure = figure_in_frame(Vec2::new(215.0, 152.0), 2.5);
        assert_eq!(figure, Rect::new(86.0, 61.0, 20.0, 60.0));
    }

    #[test]
    fn test_tint_keeps_alpha() {
        let color = [10, 20, 30, 200];
        assert_eq!(tint(color, AnimState::Idle), color);
        assert_eq!(tint(color, AnimState::Hit)[3], 200);
        assert_eq!(tint(color, AnimState::Death), [5, 10, 15, 200]);
    }
}
