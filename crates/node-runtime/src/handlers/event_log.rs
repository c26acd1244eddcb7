//! # Event Log Handler
//!
//! Subscribes to every timelock notification and writes it to the log, so
//! holders watching the node output see each scheduled mint or burn during
//! its observation window.

use shared_bus::{Subscription, TimelockEvent};
use tracing::{debug, info};

/// Logs every event received on its subscription.
pub struct EventLogHandler {
    subscription: Subscription,
    logged: u64,
}

impl EventLogHandler {
    /// Create a handler over `subscription`.
    pub fn new(subscription: Subscription) -> Self {
        Self {
            subscription,
            logged: 0,
        }
    }

    /// Run until the bus closes. Returns the number of events logged.
    pub async fn run(mut self) -> u64 {
        info!("Event log handler started");
        while let Some(event) = self.subscription.recv().await {
            log_event(&event);
            self.logged += 1;
        }
        debug!(logged = self.logged, "Event bus closed");
        self.logged
    }
}

/// Write one event at `info` level with structured fields.
pub fn log_event(event: &TimelockEvent) {
    match event {
        TimelockEvent::CallScheduled(e) => info!(
            id = %e.id,
            kind = %e.kind,
            amount = %e.amount,
            ready_at = e.ready_at,
            "CallScheduled"
        ),
        TimelockEvent::CallExecuted(e) => {
            info!(id = %e.id, kind = %e.kind, amount = %e.amount, "CallExecuted")
        }
        TimelockEvent::Cancelled(e) => info!(id = %e.id, "Cancelled"),
        TimelockEvent::MinDelayChange(e) => info!(
            old_duration = e.old_duration,
            new_duration = e.new_duration,
            "MinDelayChange"
        ),
        TimelockEvent::Transfer(e) => {
            info!(from = %e.from, to = %e.to, value = %e.value, "Transfer")
        }
    }
}
