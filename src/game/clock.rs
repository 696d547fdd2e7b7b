// Match countdown driven by the scheduler

use crate::engine::scheduler::{CancelToken, Scheduler};
use std::time::Duration;

/// Default match length in seconds
pub const MATCH_SECONDS: u32 = 60;

/// Time between countdown steps
pub const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);

/// Remaining match time, counted down once per interval
#[derive(Debug, Clone)]
pub struct MatchClock {
    duration: u32,
    remaining: u32,
    token: CancelToken,
}

impl MatchClock {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            token: CancelToken::new(),
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Whether countdown steps are still being scheduled
    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled() && !self.is_expired()
    }

    /// Take one second off; returns what is left
    pub fn count_down(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// Stop the pending countdown step; safe to call repeatedly
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }
}

impl Default for MatchClock {
    fn default() -> Self {
        Self::new(MATCH_SECONDS)
    }
}

/// Context a countdown runs against
pub trait ClockHost {
    fn clock_mut(&mut self) -> &mut MatchClock;

    /// Called after every step with the seconds left
    fn on_clock_tick(&mut self, remaining: u32);

    /// Called once when the clock reaches zero
    fn on_clock_expired(&mut self);
}

/// Schedule the first countdown step of the host's clock
///
/// Each step reschedules the next until the clock expires or its token is
/// cancelled.
pub fn start_countdown<C>(scheduler: &mut Scheduler<C>, clock: &MatchClock)
where
    C: ClockHost + 'static,
{
    schedule_next(scheduler, clock.token());
}

fn schedule_next<C: ClockHost + 'static>(scheduler: &mut Scheduler<C>, token: CancelToken) {
    scheduler.schedule_in(COUNTDOWN_INTERVAL, token.clone(), move |host: &mut C, scheduler| {
        let remaining = host.clock_mut().count_down();
        host.on_clock_tick(remaining);

        if remaining == 0 {
            host.on_clock_expired();
        } else {
            schedule_next(scheduler, token);
        }
    });
}
