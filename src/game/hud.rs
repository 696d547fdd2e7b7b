// Health bars, timer and match outcome

use super::arena::Stage;
use crate::core::Rect;
use crate::engine::renderer::{Color, RenderSurface};
use std::fmt;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub fn opponent(self) -> PlayerSlot {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    PlayerOneWins,
    PlayerTwoWins,
}

impl Outcome {
    /// Equal health ties, otherwise the healthier player wins
    pub fn decide(player_one_health: i32, player_two_health: i32) -> Self {
        match player_one_health.cmp(&player_two_health) {
            std::cmp::Ordering::Equal => Outcome::Tie,
            std::cmp::Ordering::Greater => Outcome::PlayerOneWins,
            std::cmp::Ordering::Less => Outcome::PlayerTwoWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Tie => "Tie",
            Outcome::PlayerOneWins => "Player 1 Wins",
            Outcome::PlayerTwoWins => "Player 2 Wins",
        };
        f.write_str(text)
    }
}

/// Receiver of match status updates
pub trait StatusDisplay {
    /// Health percentage of one player, already clamped to `[0, 100]`
    fn set_health(&mut self, slot: PlayerSlot, percent: i32);

    /// Seconds left on the clock
    fn set_timer(&mut self, seconds: u32);

    fn show_outcome(&mut self, text: &str);

    fn hide_outcome(&mut self);

    /// Draw onto the stage, if this display draws at all
    fn draw(&self, _surface: &mut dyn RenderSurface, _stage: &Stage) {}
}

const BAR_BACK: Color = Color::rgb(200, 30, 30);
const BAR_FRONT: Color = Color::rgb(120, 140, 255);
const FRAME: Color = Color::WHITE;
const TIMER_BACK: Color = Color::BLACK;

/// Width of the timer box between the bars
const TIMER_WIDTH: f32 = 100.0;
const MARGIN: f32 = 20.0;
const BAR_HEIGHT: f32 = 30.0;
const TIMER_HEIGHT: f32 = 50.0;

/// On-canvas HUD
#[derive(Debug, Clone)]
pub struct Hud {
    health: [i32; 2],
    timer: u32,
    outcome: Option<String>,
}

impl Hud {
    pub fn new(seconds: u32) -> Self {
        Self {
            health: [100; 2],
            timer: seconds,
            outcome: None,
        }
    }

    pub fn health(&self, slot: PlayerSlot) -> i32 {
        self.health[slot.index()]
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn outcome(&self) -> Option<&str> {
        self.outcome.as_deref()
    }

    /// Window title line: remaining time, or the outcome once decided
    pub fn title(&self) -> String {
        match &self.outcome {
            Some(outcome) => format!("Blade Duel | {}", outcome),
            None => format!("Blade Duel | {}", self.timer),
        }
    }

    fn bar_region(slot: PlayerSlot, stage: &Stage) -> Rect {
        let width = (stage.width - TIMER_WIDTH) / 2.0 - MARGIN;
        let x = match slot {
            PlayerSlot::One => MARGIN,
            PlayerSlot::Two => (stage.width + TIMER_WIDTH) / 2.0,
        };
        Rect::new(x, MARGIN + (TIMER_HEIGHT - BAR_HEIGHT) / 2.0, width, BAR_HEIGHT)
    }

    fn draw_bar(&self, surface: &mut dyn RenderSurface, slot: PlayerSlot, stage: &Stage) {
        let region = Self::bar_region(slot, stage);
        let filled = region.width * self.health(slot).clamp(0, 100) as f32 / 100.0;

        // Bars stay anchored at the timer and drain toward the stage edge
        let front = match slot {
            PlayerSlot::One => Rect::new(region.right() - filled, region.y, filled, region.height),
            PlayerSlot::Two => Rect::new(region.x, region.y, filled, region.height),
        };

        surface.fill_rect(region, BAR_BACK);
        surface.fill_rect(front, BAR_FRONT);
        surface.stroke_rect(region, FRAME, 2.0);
    }

    fn draw_timer(&self, surface: &mut dyn RenderSurface, stage: &Stage) {
        let region = Rect::new(
            (stage.width - TIMER_WIDTH) / 2.0,
            MARGIN,
            TIMER_WIDTH,
            TIMER_HEIGHT,
        );
        surface.fill_rect(region, TIMER_BACK);
        surface.stroke_rect(region, FRAME, 2.0);

        let digits = format!("{:02}", self.timer.min(99));
        let (digit_width, digit_height, gap) = (16.0, 30.0, 8.0);
        let total = digit_width * 2.0 + gap;
        let mut x = region.x + (region.width - total) / 2.0;
        let y = region.y + (region.height - digit_height) / 2.0;
        for digit in digits.chars().filter_map(|c| c.to_digit(10)) {
            draw_digit(surface, digit, Rect::new(x, y, digit_width, digit_height), FRAME);
            x += digit_width + gap;
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new(super::clock::MATCH_SECONDS)
    }
}

impl StatusDisplay for Hud {
    fn set_health(&mut self, slot: PlayerSlot, percent: i32) {
        self.health[slot.index()] = percent;
    }

    fn set_timer(&mut self, seconds: u32) {
        self.timer = seconds;
    }

    fn show_outcome(&mut self, text: &str) {
        self.outcome = Some(text.to_string());
    }

    fn hide_outcome(&mut self) {
        self.outcome = None;
    }

    fn draw(&self, surface: &mut dyn RenderSurface, stage: &Stage) {
        for slot in PlayerSlot::ALL {
            self.draw_bar(surface, slot, stage);
        }
        self.draw_timer(surface, stage);

        if self.outcome.is_some() {
            let banner = Rect::new(0.0, stage.height / 2.0 - 40.0, stage.width, 80.0);
            surface.fill_rect(banner, Color::rgba(0, 0, 0, 0.6));
            surface.stroke_rect(banner, FRAME, 2.0);
        }
    }
}

/// Seven-segment layout: a, b, c, d, e, f, g
const SEGMENTS: [[bool; 7]; 10] = [
    [true, true, true, true, true, true, false],
    [false, true, true, false, false, false, false],
    [true, true, false, true, true, false, true],
    [true, true, true, true, false, false, true],
    [false, true, true, false, false, true, true],
    [true, false, true, true, false, true, true],
    [true, false, true, true, true, true, true],
    [true, true, true, false, false, false, false],
    [true, true, true, true, true, true, true],
    [true, true, true, true, false, true, true],
];

fn draw_digit(surface: &mut dyn RenderSurface, digit: u32, cell: Rect, color: Color) {
    let Some(lit) = SEGMENTS.get(digit as usize) else {
        return;
    };
    let t = 3.0;
    let half = cell.height / 2.0;
    let segments = [
        Rect::new(cell.x, cell.y, cell.width, t),
        Rect::new(cell.right() - t, cell.y, t, half),
        Rect::new(cell.right() - t, cell.y + half, t, half),
        Rect::new(cell.x, cell.bottom() - t, cell.width, t),
        Rect::new(cell.x, cell.y + half, t, half),
        Rect::new(cell.x, cell.y, t, half),
        Rect::new(cell.x, cell.y + half - t / 2.0, cell.width, t),
    ];
    for (segment, on) in segments.into_iter().zip(lit) {
        if *on {
            surface.fill_rect(segment, color);
        }
    }
}
