//! Search-submission state machine
//!
//! Two states: idle and submitting. A submission swaps the active dataset
//! and recenters the map immediately (the screen applies those effects),
//! then settles back to idle after a fixed short delay that models what
//! would be a backend query. Nothing here blocks: the owner calls
//! [`SearchSubmission::tick`] from its event loop and the machine settles
//! once the deadline has passed. The operation cannot fail; both datasets
//! are bundled and always available.

use chrono::{DateTime, Duration, Utc};

/// Phase of the submission machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No submission in flight
    Idle,
    /// A submission started at the given instant
    Submitting(DateTime<Utc>),
}

/// The idle/submitting machine with its settle deadline
#[derive(Debug, Clone)]
pub struct SearchSubmission {
    phase: Phase,
    settle_after: Duration,
}

impl SearchSubmission {
    /// Create an idle machine that settles `settle_ms` after each begin
    pub fn new(settle_ms: u64) -> Self {
        Self { phase: Phase::Idle, settle_after: Duration::milliseconds(settle_ms as i64) }
    }

    /// Whether a submission is currently in flight
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    /// Start a submission at `now`
    ///
    /// Returns `false` (and changes nothing) when one is already in flight.
    pub fn begin(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = Phase::Submitting(now);
        true
    }

    /// The instant the in-flight submission will settle, if any
    pub fn settle_deadline(&self) -> Option<DateTime<Utc>> {
        match self.phase {
            Phase::Idle => None,
            Phase::Submitting(since) => Some(since + self.settle_after),
        }
    }

    /// Whether the in-flight submission is due to settle at `now`
    pub fn is_settle_due(&self, now: DateTime<Utc>) -> bool {
        self.settle_deadline().is_some_and(|deadline| now >= deadline)
    }

    /// Settle the submission if its deadline has passed
    ///
    /// Returns `true` exactly once per submission, on the tick that settles
    /// it.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_settle_due(now) {
            self.phase = Phase::Idle;
            return true;
        }
        false
    }
}
