//! # Stats Reporter
//!
//! Periodically logs controller counters and the pending queue.

use std::sync::Arc;
use std::time::Duration;

use tl_02_timelock_ledger::InMemoryTimelockService;
use tracing::info;

/// Logs a stats line every `interval`.
pub struct StatsReporter {
    timelock: Arc<InMemoryTimelockService>,
    interval: Duration,
}

impl StatsReporter {
    /// Create a reporter for `timelock`.
    pub fn new(timelock: Arc<InMemoryTimelockService>, interval: Duration) -> Self {
        Self { timelock, interval }
    }

    /// Log one report now.
    pub fn report(&self) {
        let stats = self.timelock.stats();
        let pending = self.timelock.pending_operations();
        info!(
            scheduled = stats.operations_scheduled,
            executed = stats.operations_executed,
            cancelled = stats.operations_cancelled,
            rejected = stats.rejected_requests,
            pending = pending.len(),
            total_supply = %self.timelock.total_supply(),
            "Timelock stats"
        );
    }

    /// Report forever. Cancel by dropping the task.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        // First tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            self.report();
        }
    }
}
