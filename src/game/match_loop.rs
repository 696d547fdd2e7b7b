// Match driver: per-tick update, combat resolution and the end of the match

use super::arena::{Scenery, Stage};
use super::characters::{Fighter, FighterPreset};
use super::clock::{start_countdown, ClockHost, MatchClock, MATCH_SECONDS};
use super::hud::{Outcome, PlayerSlot, StatusDisplay};
use crate::engine::input::{Action, InputManager};
use crate::engine::physics::{overlaps, DebugOverlay};
use crate::engine::renderer::{Color, RenderSurface};
use crate::engine::scheduler::Scheduler;
use log::{debug, info, trace};
use std::time::Duration;

/// Everything needed to (re)start a match
#[derive(Debug, Clone)]
pub struct MatchSetup {
    pub stage: Stage,
    pub presets: [FighterPreset; 2],
    pub scenery: Scenery,
    /// Match length in seconds
    pub duration: u32,
}

impl MatchSetup {
    pub fn new(stage: Stage, presets: [FighterPreset; 2], scenery: Scenery) -> Self {
        Self {
            stage,
            presets,
            scenery,
            duration: MATCH_SECONDS,
        }
    }
}

/// Mutable state of one match
///
/// The single `active` flag guards finalisation: whichever of the health
/// check and the clock gets there first ends the match, the other is a no-op.
pub struct MatchContext<D> {
    fighters: [Fighter; 2],
    scenery: Scenery,
    stage: Stage,
    input: InputManager,
    clock: MatchClock,
    display: D,
    debug: DebugOverlay,
    active: bool,
    outcome: Option<Outcome>,
}

impl<D: StatusDisplay> MatchContext<D> {
    fn new(setup: &MatchSetup, input: InputManager, display: D, debug: DebugOverlay) -> Self {
        Self {
            fighters: [
                Fighter::new(&setup.presets[0]),
                Fighter::new(&setup.presets[1]),
            ],
            scenery: setup.scenery.clone(),
            stage: setup.stage,
            input,
            clock: MatchClock::new(setup.duration),
            display,
            debug,
            active: true,
            outcome: None,
        }
    }

    /// One frame of the match, drawn onto `surface`
    fn tick(&mut self, surface: &mut dyn RenderSurface) {
        let bounds = self.stage.bounds();
        surface.clear(bounds);
        surface.fill_rect(bounds, Color::BLACK);
        self.scenery.tick(surface, &self.stage);

        for slot in PlayerSlot::ALL {
            let events = self.input.drain(slot.index());
            self.fighters[slot.index()].update(&events, &self.stage, surface);
        }

        // Both windows are sampled before any hit lands so a same-tick trade resolves both ways
        let windows = [
            self.fighters[0].in_damage_window(),
            self.fighters[1].in_damage_window(),
        ];
        for slot in PlayerSlot::ALL {
            if windows[slot.index()] {
                self.resolve_swing(slot);
            }
        }

        if self.active
            && (self.fighters.iter().any(|f| f.health() <= 0) || self.clock.is_expired())
        {
            self.finalize();
        }

        for fighter in &self.fighters {
            self.debug.draw(
                surface,
                fighter.body_rect(),
                fighter.hitbox_rect(),
                fighter.is_attacking(),
            );
        }
        self.display.draw(surface, &self.stage);
    }

    /// Resolve the damage window of `attacker`'s swing, hit or miss
    fn resolve_swing(&mut self, attacker: PlayerSlot) {
        let defender = attacker.opponent();
        let [one, two] = &mut self.fighters;
        let (striker, target) = match attacker {
            PlayerSlot::One => (one, two),
            PlayerSlot::Two => (two, one),
        };

        if self.active && overlaps(&striker.hitbox_rect(), &target.body_rect()) {
            target.take_hit();
            debug!(
                "{} hits {}, health now {}",
                striker.name(),
                target.name(),
                target.health()
            );
            self.display.set_health(defender, target.displayed_health());
        } else {
            trace!("{} whiffs", striker.name());
        }

        striker.end_attack_window();
    }

    /// End the match: stop the clock, freeze input, announce the outcome
    pub fn finalize(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        self.clock.cancel();
        self.input.detach_all();
        for fighter in &mut self.fighters {
            fighter.release_controls();
        }

        let [one, two] = &self.fighters;
        let outcome = Outcome::decide(one.health(), two.health());
        self.outcome = Some(outcome);
        self.display.show_outcome(&outcome.to_string());

        info!(
            "Match over: {} ({} {} - {} {}, {}s left)",
            outcome,
            one.name(),
            one.displayed_health(),
            two.name(),
            two.displayed_health(),
            self.clock.remaining()
        );
    }

    pub fn fighter(&self, slot: PlayerSlot) -> &Fighter {
        &self.fighters[slot.index()]
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl<D: StatusDisplay> ClockHost for MatchContext<D> {
    fn clock_mut(&mut self) -> &mut MatchClock {
        &mut self.clock
    }

    fn on_clock_tick(&mut self, remaining: u32) {
        self.display.set_timer(remaining);
    }

    fn on_clock_expired(&mut self) {
        info!("Time up");
        self.finalize();
    }
}

/// Owns the match and the scheduler its countdown runs on
pub struct MatchLoop<D: StatusDisplay + 'static> {
    setup: MatchSetup,
    context: MatchContext<D>,
    scheduler: Scheduler<MatchContext<D>>,
}

impl<D: StatusDisplay + 'static> MatchLoop<D> {
    /// Build the match and start it
    pub fn new(setup: MatchSetup, display: D) -> Self {
        let context = MatchContext::new(
            &setup,
            InputManager::new(PlayerSlot::ALL.len()),
            display,
            DebugOverlay::new(),
        );
        let mut match_loop = Self {
            setup,
            context,
            scheduler: Scheduler::new(),
        };
        match_loop.start();
        match_loop
    }

    fn start(&mut self) {
        let context = &mut self.context;
        for slot in PlayerSlot::ALL {
            context
                .display
                .set_health(slot, context.fighters[slot.index()].displayed_health());
        }
        context.display.set_timer(context.clock.remaining());
        context.display.hide_outcome();
        context.input.attach_all();

        start_countdown(&mut self.scheduler, &self.context.clock);

        info!(
            "Match started: {} vs {}, {}s on the clock",
            self.setup.presets[0].name, self.setup.presets[1].name, self.setup.duration
        );
    }

    /// Run one gameplay tick
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) {
        self.context.tick(surface);
    }

    /// Let wall-clock time pass for the countdown
    pub fn advance_clock(&mut self, dt: Duration) {
        self.scheduler.advance(dt, &mut self.context);
    }

    /// Act on restart / debug-overlay key presses
    pub fn handle_global_actions(&mut self) {
        for action in self.context.input.take_global() {
            match action {
                Action::Restart => self.restart(),
                Action::ToggleDebug => self.context.debug.toggle(),
                _ => {}
            }
        }
    }

    /// Throw away the current match and start a fresh one
    ///
    /// Key bindings, the debug overlay setting and the display carry over.
    pub fn restart(&mut self) {
        info!("Restarting match");
        self.context.clock.cancel();
        self.scheduler.clear();

        self.context.fighters = [
            Fighter::new(&self.setup.presets[0]),
            Fighter::new(&self.setup.presets[1]),
        ];
        for slot in PlayerSlot::ALL {
            self.context.input.drain(slot.index());
        }
        self.context.scenery = self.setup.scenery.clone();
        self.context.clock = MatchClock::new(self.setup.duration);
        self.context.active = true;
        self.context.outcome = None;

        self.start();
    }

    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.context.input
    }

    pub fn context(&self) -> &MatchContext<D> {
        &self.context
    }

    pub fn display(&self) -> &D {
        &self.context.display
    }

    pub fn stage(&self) -> &Stage {
        &self.context.stage
    }

    pub fn is_active(&self) -> bool {
        self.context.active
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.context.outcome
    }
}
