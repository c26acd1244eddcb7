//! # Timelock Ledger Node
//!
//! Runs the timelock ledger controller in-process with structured logging
//! and Prometheus metrics.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from `TL_*` environment variables
//! 2. Install telemetry (logging, metrics registry)
//! 3. Build the container and spawn handlers
//! 4. Wait for Ctrl+C, then shut down gracefully

use anyhow::{Context, Result};
use tracing::info;

use node_runtime::{NodeConfig, NodeRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env()?;

    timelock_telemetry::init_telemetry(&config.telemetry)
        .context("Failed to initialize telemetry")?;

    let mut runtime = NodeRuntime::new(config)?;
    runtime.start();

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;

    runtime.shutdown().await
}
