//! Supersession guard for operator-triggered operations
//!
//! A new search or show selection supersedes whatever was in flight. The
//! late result of a superseded operation is discarded instead of
//! overwriting newer output.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

/// Proof that an operation was started at a given generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Monotonically increasing operation counter
///
/// Share one tracker between every operation that writes the same output
/// surface.
#[derive(Debug, Default)]
pub struct GenerationTracker {
    current: AtomicU64,
}

impl GenerationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new operation, superseding all earlier ones
    pub fn begin(&self) -> Ticket {
        let generation = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket { generation }
    }

    /// Whether no operation started after `ticket`
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.current.load(Ordering::Acquire) == ticket.generation
    }

    /// Run `fut` as a new operation
    ///
    /// # Returns
    /// `Some(output)` if the operation is still the newest when `fut`
    /// completes, `None` if another one began meanwhile
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        let ticket = self.begin();
        let output = fut.await;
        if self.is_current(&ticket) {
            Some(output)
        } else {
            tracing::debug!(generation = ticket.generation, "Discarding superseded result");
            None
        }
    }
}
