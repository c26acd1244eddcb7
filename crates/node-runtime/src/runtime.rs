//! # Node Runtime
//!
//! ## Startup Sequence
//!
//! 1. Build the subsystem container (bus, then controller)
//! 2. Spawn the event log handler
//! 3. Spawn the stats reporter (if enabled)
//!
//! ## Shutdown Sequence
//!
//! 1. Signal handlers to stop
//! 2. Log final stats
//! 3. Write the snapshot (if configured)

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use shared_bus::EventFilter;

use crate::container::{NodeConfig, SubsystemContainer};
use crate::handlers::{EventLogHandler, StatsReporter};

/// The node runtime orchestrating the controller and its handlers.
pub struct NodeRuntime {
    container: Arc<SubsystemContainer>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl NodeRuntime {
    /// Create a new node runtime with configuration.
    pub fn new(config: NodeConfig) -> Result<Self> {
        info!("Creating timelock ledger node runtime");
        let container = Arc::new(SubsystemContainer::new(config)?);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            container,
            shutdown_tx,
            shutdown_rx,
            tasks: Vec::new(),
        })
    }

    /// Spawn background handlers.
    pub fn start(&mut self) {
        info!("===========================================");
        info!("  Timelock Ledger Node v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        let event_log = EventLogHandler::new(self.container.event_bus.subscribe(EventFilter::all()));
        let mut log_shutdown = self.shutdown_rx.clone();
        self.tasks.push(tokio::spawn(async move {
            tokio::select! {
                logged = event_log.run() => info!(logged, "Event log handler finished"),
                _ = log_shutdown.changed() => info!("[event-log] Shutdown signal received"),
            }
        }));

        if let Some(interval) = self.container.config.stats_interval {
            let reporter = StatsReporter::new(Arc::clone(&self.container.timelock), interval);
            let mut stats_shutdown = self.shutdown_rx.clone();
            self.tasks.push(tokio::spawn(async move {
                tokio::select! {
                    _ = reporter.run() => {}
                    _ = stats_shutdown.changed() => info!("[stats] Shutdown signal received"),
                }
            }));
        }

        info!(
            owner = %self.container.config.timelock.owner,
            min_delay = self.container.config.timelock.min_delay_secs,
            handlers = self.tasks.len(),
            "Node started"
        );
    }

    /// Stop handlers and persist the snapshot.
    pub async fn shutdown(self) -> Result<()> {
        info!("Initiating graceful shutdown...");

        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }
        for task in self.tasks {
            if let Err(e) = task.await {
                error!("Handler task failed: {}", e);
            }
        }

        if let Some(interval) = self.container.config.stats_interval {
            StatsReporter::new(Arc::clone(&self.container.timelock), interval).report();
        }

        if let Some(path) = &self.container.config.snapshot_path {
            write_snapshot(&self.container, path)?;
        }

        info!("Shutdown complete");
        Ok(())
    }

    /// Get a reference to the subsystem container.
    pub fn container(&self) -> Arc<SubsystemContainer> {
        Arc::clone(&self.container)
    }
}

fn write_snapshot(container: &SubsystemContainer, path: &Path) -> Result<()> {
    let json = container
        .timelock
        .snapshot()
        .to_json()
        .context("Failed to encode snapshot")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
    info!(path = %path.display(), "Snapshot written");
    Ok(())
}
