use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::Config;
use crate::models::{Dimensions, ResizeOptions, ResizeType};
use crate::services::significance::check_size;
use crate::utils::debounce::{Debouncer, Scheduler};

/// Something whose size can be read on demand.
pub trait Surface {
    fn dimensions(&self) -> Dimensions;
}

impl<S: Surface + ?Sized> Surface for Rc<S> {
    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }
}

/// User callback, invoked with the latest raw event.
pub type ResizeCallback<E> = Rc<dyn Fn(&E)>;

struct FilterState<E> {
    /// Size at the last accepted resize.
    accepted: Dimensions,
    last_event: Option<Rc<E>>,
}

struct FilterInner<E, S, T: Scheduler> {
    options: ResizeOptions,
    callback: ResizeCallback<E>,
    surface: S,
    detached: Cell<bool>,
    state: RefCell<FilterState<E>>,
    // Kept apart from `state`: a scheduler may run the task before
    // `schedule` returns, and the task reads `state`.
    debouncer: RefCell<Debouncer<T>>,
}

/// Decides, for every raw resize notification, whether and when the
/// callback runs.
///
/// Cloning yields another handle to the same filter.
pub struct ResizeFilter<E, S, T: Scheduler> {
    inner: Rc<FilterInner<E, S, T>>,
}

impl<E, S, T: Scheduler> Clone for ResizeFilter<E, S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E, S, T> ResizeFilter<E, S, T>
where
    E: 'static,
    S: Surface + 'static,
    T: Scheduler + 'static,
{
    /// Snapshots the current surface size. Returns `None` (an inert filter)
    /// when no callback is given.
    pub fn new(
        options: ResizeOptions,
        callback: Option<ResizeCallback<E>>,
        surface: S,
        scheduler: T,
    ) -> Option<Self> {
        let accepted = surface.dimensions();
        let Some(callback) = callback else {
            log::debug!(target: Config::LOG_TARGET, "no callback configured, filter is inert");
            return None;
        };

        log::debug!(
            target: Config::LOG_TARGET,
            "filter attached at {accepted} (type={}, timeout={:?})",
            options.resize_type,
            options.timeout
        );

        Some(Self {
            inner: Rc::new(FilterInner {
                options,
                callback,
                surface,
                detached: Cell::new(false),
                state: RefCell::new(FilterState {
                    accepted,
                    last_event: None,
                }),
                debouncer: RefCell::new(Debouncer::new(scheduler)),
            }),
        })
    }

    /// Entry point for every raw resize notification from the host.
    pub fn handle_raw_event(&self, event: E) {
        if self.is_detached() {
            log::trace!(target: Config::LOG_TARGET, "notification after detach ignored");
            return;
        }

        // Latest event wins, significant or not
        self.inner.state.borrow_mut().last_event = Some(Rc::new(event));

        // Rejected notifications leave a pending timer alone
        if !self.is_significant() {
            return;
        }

        match self.inner.options.timeout {
            Some(millis) => {
                // Replace pending timeout
                let weak = Rc::downgrade(&self.inner);
                log::debug!(target: Config::LOG_TARGET, "dispatch scheduled in {millis}ms");
                self.inner
                    .debouncer
                    .borrow_mut()
                    .debounce(millis, move || fire(&weak));
            }
            None => self.dispatch(),
        }
    }

    /// Whether the current notification counts as a qualifying resize.
    /// Updates the accepted size when it does.
    pub fn is_significant(&self) -> bool {
        let options = &self.inner.options;
        // Nothing to compare against: trust the host
        if !options.requires_verification() {
            return true;
        }

        let current = self.inner.surface.dimensions();
        let mut state = self.inner.state.borrow_mut();
        let last = state.accepted;

        let height = check_size(
            current.height,
            options.diff_height,
            options.step_height.as_deref(),
            last.height,
        );
        let width = check_size(
            current.width,
            options.diff_width,
            options.step_width.as_deref(),
            last.width,
        );

        // Combine per watched axis
        let accepted = match options.resize_type {
            ResizeType::Both => height || width,
            ResizeType::Width => width,
            ResizeType::Height => height,
        };

        // Only accepted sizes become the new baseline
        if accepted {
            log::debug!(target: Config::LOG_TARGET, "resize accepted: {last} -> {current}");
            state.accepted = current;
        } else {
            log::debug!(target: Config::LOG_TARGET, "resize rejected: {last} -> {current}");
        }
        accepted
    }

    /// Invokes the callback with the latest stored event.
    pub fn dispatch(&self) {
        dispatch(&self.inner);
    }

    /// Stops reacting to notifications and cancels the pending dispatch.
    /// Returns whether a dispatch was cancelled.
    pub fn detach(&self) -> bool {
        self.inner.detached.set(true);
        // Already borrowed means we are inside `schedule`, whose task has run
        let cancelled = self
            .inner
            .debouncer
            .try_borrow_mut()
            .is_ok_and(|mut debouncer| debouncer.cancel());
        log::debug!(target: Config::LOG_TARGET, "filter detached (cancelled pending: {cancelled})");
        cancelled
    }

    /// Size at the last accepted resize.
    pub fn dimensions(&self) -> Dimensions {
        self.inner.state.borrow().accepted
    }

    pub fn is_pending(&self) -> bool {
        self.inner
            .debouncer
            .try_borrow()
            .is_ok_and(|debouncer| debouncer.is_pending())
    }

    pub fn is_detached(&self) -> bool {
        self.inner.detached.get()
    }

    pub fn options(&self) -> &ResizeOptions {
        &self.inner.options
    }

    pub fn surface(&self) -> &S {
        &self.inner.surface
    }

    pub fn downgrade(&self) -> WeakResizeFilter<E, S, T> {
        WeakResizeFilter {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Non-owning handle, for host subscriptions that must not keep the filter alive.
pub struct WeakResizeFilter<E, S, T: Scheduler> {
    inner: Weak<FilterInner<E, S, T>>,
}

impl<E, S, T: Scheduler> Clone for WeakResizeFilter<E, S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E, S, T: Scheduler> WeakResizeFilter<E, S, T> {
    pub fn upgrade(&self) -> Option<ResizeFilter<E, S, T>> {
        self.inner.upgrade().map(|inner| ResizeFilter { inner })
    }
}

fn fire<E, S, T: Scheduler>(weak: &Weak<FilterInner<E, S, T>>) {
    if let Some(inner) = weak.upgrade() {
        if !inner.detached.get() {
            dispatch(&inner);
        }
    }
}

fn dispatch<E, S, T: Scheduler>(inner: &FilterInner<E, S, T>) {
    // Release the borrow before calling out: the callback may re-enter.
    let event = inner.state.borrow().last_event.clone();
    if let Some(event) = event {
        log::debug!(target: Config::LOG_TARGET, "dispatching resize callback");
        (inner.callback)(&*event);
    }
}
