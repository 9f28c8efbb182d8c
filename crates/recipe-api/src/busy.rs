//! Busy State Tracker
//!
//! Reference-counted replacement for a global loading flag. Every call holds a
//! guard; the indicator turns off only when the last guard is dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Observer = Rc<dyn Fn(bool)>;

#[derive(Clone, Default)]
pub struct BusyTracker {
    active: Rc<Cell<usize>>,
    observer: Rc<RefCell<Option<Observer>>>,
}

impl BusyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback notified on idle -> busy and busy -> idle transitions
    pub fn observe(&self, observer: impl Fn(bool) + 'static) {
        *self.observer.borrow_mut() = Some(Rc::new(observer));
        observer_notify(&self.observer, self.is_busy());
    }

    /// Mark one call in flight until the returned guard is dropped
    pub fn acquire(&self) -> BusyGuard {
        let previous = self.active.get();
        self.active.set(previous + 1);
        if previous == 0 {
            observer_notify(&self.observer, true);
        }
        BusyGuard {
            tracker: self.clone(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.active.get() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.active.get()
    }

    fn release(&self) {
        let remaining = self.active.get().saturating_sub(1);
        self.active.set(remaining);
        if remaining == 0 {
            observer_notify(&self.observer, false);
        }
    }
}

fn observer_notify(observer: &RefCell<Option<Observer>>, busy: bool) {
    // Clone out so the callback may re-enter the tracker
    let callback = observer.borrow().clone();
    if let Some(callback) = callback {
        callback(busy);
    }
}

impl fmt::Debug for BusyTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusyTracker")
            .field("active", &self.active.get())
            .finish()
    }
}

/// Scoped busy marker; releases on drop, including early returns and errors
#[must_use = "the call is only marked busy while the guard is alive"]
pub struct BusyGuard {
    tracker: BusyTracker,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.tracker.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_calls_keep_indicator_on() {
        let tracker = BusyTracker::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        tracker.observe(move |busy| sink.borrow_mut().push(busy));

        let first = tracker.acquire();
        let second = tracker.acquire();
        drop(first);
        assert!(tracker.is_busy());
        drop(second);
        assert!(!tracker.is_busy());

        // initial state, then exactly one on and one off
        assert_eq!(*events.borrow(), vec![false, true, false]);
    }
}
