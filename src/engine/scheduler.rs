// Cooperative task scheduler
//
// Runs one-shot callbacks at a point in (virtual) time. Time only moves when
// the owner calls [`Scheduler::advance`], so the same scheduler drives the
// real game (advanced by wall-clock frame time) and deterministic tests.
//
// A task that wants to repeat reschedules itself from inside its callback,
// which receives the scheduler as its second argument. Every task carries a
// [`CancelToken`]; cancelling the token drops the pending task without
// needing access to the scheduler.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Callback invoked when a task comes due
pub type TaskFn<C> = Box<dyn FnOnce(&mut C, &mut Scheduler<C>)>;

/// Identifier returned when scheduling a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// Shared cancellation flag for scheduled tasks
///
/// Clones observe the same flag. Cancelling twice is a no-op.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

struct ScheduledTask<C> {
    id: TaskId,
    due: Duration,
    token: CancelToken,
    run: TaskFn<C>,
}

/// Single-threaded scheduler of timed callbacks over a context `C`
pub struct Scheduler<C> {
    /// Current virtual time
    now: Duration,
    next_id: u64,
    tasks: Vec<ScheduledTask<C>>,
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `run` to execute `delay` after the current time
    pub fn schedule_in<F>(&mut self, delay: Duration, token: CancelToken, run: F) -> TaskId
    where
        F: FnOnce(&mut C, &mut Scheduler<C>) + 'static,
    {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due: self.now + delay,
            token,
            run: Box::new(run),
        });
        id
    }

    /// Number of tasks still waiting to run (cancelled tasks excluded)
    pub fn pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| !task.token.is_cancelled())
            .count()
    }

    /// Move time forward by `dt`, running every task that comes due, in due order
    ///
    /// While a task runs, `now()` reports that task's due time, so a task that
    /// reschedules itself keeps a fixed period even when `dt` spans several
    /// periods. Returns the number of tasks that ran.
    pub fn advance(&mut self, dt: Duration, ctx: &mut C) -> usize {
        let target = self.now + dt;
        let mut ran = 0;

        loop {
            self.tasks.retain(|task| !task.token.is_cancelled());

            let next = self
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, task)| task.due <= target)
                .min_by_key(|(_, task)| (task.due, task.id))
                .map(|(index, _)| index);

            let Some(index) = next else {
                break;
            };

            let task = self.tasks.swap_remove(index);
            self.now = task.due.max(self.now);
            (task.run)(ctx, self);
            ran += 1;
        }

        self.now = target;
        ran
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Scheduler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now)
            .field("pending", &self.pending())
            .finish()
    }
}
