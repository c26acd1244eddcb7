//! # Subsystem Container
//!
//! ```text
//! Level 0: Event Bus (no dependencies)
//! Level 1: Operation Registry (owned by the controller)
//! Level 2: Timelock Ledger Controller (bus, clock, ledger, owner)
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use shared_bus::InMemoryEventBus;
use tl_02_timelock_ledger::{
    InMemoryLedger, InMemoryTimelockService, SingleOwner, SystemClock, TimelockLedgerService,
};

use crate::container::config::NodeConfig;

/// Central container holding all subsystem instances.
pub struct SubsystemContainer {
    /// Shared event bus.
    pub event_bus: Arc<InMemoryEventBus>,

    /// Timelock ledger controller (Subsystem 2, owns Subsystem 1).
    pub timelock: Arc<InMemoryTimelockService>,

    /// Configuration the container was built from.
    pub config: NodeConfig,
}

impl SubsystemContainer {
    /// Initialize subsystems in dependency order.
    #[instrument(skip_all, fields(min_delay = config.timelock.min_delay_secs))]
    pub fn new(config: NodeConfig) -> Result<Self> {
        let event_bus = Arc::new(InMemoryEventBus::with_capacity(config.bus_capacity));
        info!(capacity = config.bus_capacity, "Event bus ready");

        let timelock = TimelockLedgerService::new(
            config.timelock.clone(),
            InMemoryLedger::new(),
            SystemClock,
            SingleOwner::new(config.timelock.owner),
            Arc::clone(&event_bus),
        )
        .context("Failed to start timelock ledger controller")?;

        Ok(Self {
            event_bus,
            timelock: Arc::new(timelock),
            config,
        })
    }
}
