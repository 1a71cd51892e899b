use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;

/// A one-shot timer facility.
///
/// The returned handle owns the scheduled task: dropping it before the task
/// runs cancels the task, which is how [`gloo_timers::callback::Timeout`]
/// behaves. Implementations may run the task before `schedule` returns.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, task)
    }
}

struct Pending<H> {
    _handle: H,
    fired: Rc<Cell<bool>>,
}

/// Holds at most one scheduled task; scheduling a new one cancels the old.
///
/// This prevents performance issues caused by rapidly firing resize events (60+ times/second
/// during window dragging): only the last task scheduled within the delay ever runs.
///
/// # Example
///
/// ```rust,ignore
/// let mut debouncer = Debouncer::new(TimeoutScheduler);
/// debouncer.debounce(150, || update_dimensions());
/// debouncer.debounce(150, || update_dimensions()); // first call is cancelled
/// ```
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    pending: Option<Pending<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Cancels any pending task and schedules `task` to run after `millis`.
    pub fn debounce<F>(&mut self, millis: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = self.scheduler.schedule(
            millis,
            Box::new(move || {
                flag.set(true);
                task();
            }),
        );
        self.pending = Some(Pending {
            _handle: handle,
            fired,
        });
    }

    /// True while a scheduled task has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.fired.get())
    }

    /// Cancels the pending task. Returns whether one was actually waiting.
    pub fn cancel(&mut self) -> bool {
        // Dropping the handle cancels the timer; a fired handle is inert.
        self.pending.take().is_some_and(|p| !p.fired.get())
    }
}
