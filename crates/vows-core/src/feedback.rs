//! Copy-feedback markers.
//!
//! A successful clipboard write marks an identifier as "copied" and schedules
//! its release. Each mark carries a generation so that copying the same
//! identifier again restarts its window instead of being cut short by the
//! earlier release.

use std::collections::HashMap;
use std::time::Duration;

use crate::timers::Scheduler;

/// How long a "copied" marker stays active.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);

/// Release handle for one mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CopyTicket {
    id: String,
    generation: u64,
}

impl CopyTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Set of identifiers that were just copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    active: HashMap<String, u64>,
    next_generation: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as copied and schedule its release after
    /// [`COPY_FEEDBACK_WINDOW`].
    pub fn mark<S>(&mut self, id: impl Into<String>, scheduler: &mut S) -> CopyTicket
    where
        S: Scheduler<CopyTicket>,
    {
        let id = id.into();
        let generation = self.next_generation;
        self.next_generation += 1;
        self.active.insert(id.clone(), generation);

        let ticket = CopyTicket { id, generation };
        scheduler.schedule(COPY_FEEDBACK_WINDOW, ticket.clone());
        ticket
    }

    /// Clear the marker if `ticket` is still the latest mark for its id.
    pub fn release(&mut self, ticket: &CopyTicket) -> bool {
        if self.active.get(&ticket.id) == Some(&ticket.generation) {
            self.active.remove(&ticket.id);
            true
        } else {
            false
        }
    }

    pub fn is_copied(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
