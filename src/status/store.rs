//! Atomic publication of the aggregated status.
//!
//! Single writer (the scheduler), many readers (endpoint handlers). The
//! value is swapped whole, so a reader always observes the complete result
//! of some finished cycle, never a mix of two cycles.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::status::aggregate::AggregatedStatus;

/// Process-wide holder of the most recently published status.
pub struct StatusStore {
    current: ArcSwap<AggregatedStatus>,
}

impl StatusStore {
    /// Create a store holding the "unchecked" placeholder.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(AggregatedStatus::unchecked()),
        }
    }

    /// Replace the published status wholesale.
    pub fn publish(&self, status: AggregatedStatus) {
        self.current.store(Arc::new(status));
    }

    /// Snapshot the latest published status. Never blocks on an
    /// in-progress cycle.
    pub fn snapshot(&self) -> Arc<AggregatedStatus> {
        self.current.load_full()
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}
