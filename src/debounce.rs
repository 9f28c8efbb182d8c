//! Debounce Primitive
//!
//! Runs a task only after a quiet period. At most one task is pending: every
//! trigger drops the previous handle, and dropping a handle cancels its task.

use std::time::Duration;

/// Something that can run a task later
pub trait Scheduler {
    /// Cancels the scheduled task when dropped
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser scheduler backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task)
    }
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: None,
        }
    }

    /// Replace any pending task with `task`, due after the full delay
    pub fn trigger(&mut self, task: impl FnOnce() + 'static) {
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(self.delay, Box::new(task)));
    }

    /// Drop the pending task, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
