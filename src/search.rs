//! Search Input Handling
//!
//! Decides what a keystroke in the search box means, debounces typed
//! queries, and tags each search request so a slow response can't overwrite
//! a newer one.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::debounce::{Debouncer, Scheduler};

/// Quiet period after the last keystroke before searching
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Typed queries shorter than this never trigger a search
pub const MIN_QUERY_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// Box is blank: drop results and any pending search
    Clear,
    /// Too short to search yet
    TooShort,
    /// Search for this (trimmed) query once typing settles
    Query(String),
}

pub fn classify_input(raw: &str) -> SearchInput {
    let query = raw.trim();
    if query.is_empty() {
        SearchInput::Clear
    } else if query.chars().count() < MIN_QUERY_CHARS {
        SearchInput::TooShort
    } else {
        SearchInput::Query(query.to_string())
    }
}

/// Explicit submit searches any non-blank query, however short
pub fn submitted_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    (!query.is_empty()).then(|| query.to_string())
}

/// Hands out increasing tickets; only the latest one is current
#[derive(Clone, Default)]
pub struct RequestSequencer {
    latest: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSequencer {
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    /// Invalidate every outstanding ticket (e.g. the box was cleared)
    pub fn invalidate(&self) {
        self.issue();
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

/// Search box state: the pending debounced search and the request tickets
pub struct SearchBox<S: Scheduler> {
    debouncer: Debouncer<S>,
    sequencer: RequestSequencer,
}

impl<S: Scheduler> SearchBox<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            debouncer: Debouncer::new(scheduler, SEARCH_DEBOUNCE),
            sequencer: RequestSequencer::default(),
        }
    }

    /// Handle the box's new contents. A searchable query schedules `search`
    /// after the quiet period; anything else cancels the pending one, and a
    /// blank box also invalidates requests in flight.
    pub fn input(&mut self, raw: &str, search: impl FnOnce(String) + 'static) -> SearchInput {
        let input = classify_input(raw);
        match &input {
            SearchInput::Query(query) => {
                let query = query.clone();
                self.debouncer.trigger(move || search(query));
            }
            SearchInput::TooShort => self.debouncer.cancel(),
            SearchInput::Clear => {
                self.debouncer.cancel();
                self.sequencer.invalidate();
            }
        }
        input
    }

    /// Explicit submit: drop the pending search and return the query to run now
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let query = submitted_query(raw)?;
        self.debouncer.cancel();
        Some(query)
    }

    pub fn issue(&self) -> Ticket {
        self.sequencer.issue()
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.sequencer.is_current(ticket)
    }
}
