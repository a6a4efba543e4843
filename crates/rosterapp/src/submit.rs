//! # Submission Gate
//!
//! Form submissions pass through a simulated network round trip before the
//! store is touched. The gate makes that delay an explicit async step with a
//! single outcome, and refuses a second submission while one is in flight.
//!
//! ```text
//! idle ──submit──▶ pending ──sleep(latency)──▶ run op ──▶ idle
//!                     │
//!                     └── submit again ──▶ Err(SubmissionPending)
//! ```
//!
//! Dropping the pending future (for example when the caller gives up)
//! returns the gate to idle without running the operation.

use crate::error::{Result, RosterError};
use std::cell::Cell;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct SubmitGate {
    latency: Duration,
    pending: Cell<bool>,
}

struct PendingGuard<'a>(&'a Cell<bool>);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl SubmitGate {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            pending: Cell::new(false),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Waits out the latency, then runs `op` and returns its result.
    pub async fn submit<T>(&self, op: impl FnOnce() -> T) -> Result<T> {
        if self.pending.replace(true) {
            return Err(RosterError::SubmissionPending);
        }
        let _guard = PendingGuard(&self.pending);
        debug!(latency_ms = self.latency.as_millis() as u64, "submission pending");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(op())
    }
}

impl Default for SubmitGate {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LATENCY)
    }
}
