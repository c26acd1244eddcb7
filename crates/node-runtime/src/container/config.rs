//! # Node Configuration
//!
//! Unified configuration for the controller, telemetry and runtime
//! parameters.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TL_BUS_CAPACITY` | `1000` | Events buffered per subscriber |
//! | `TL_STATS_INTERVAL_SECS` | `60` | Stats report period, `0` disables |
//! | `TL_SNAPSHOT_PATH` | unset | Write a JSON snapshot here on shutdown |
//!
//! Controller and telemetry variables are documented with their own configs.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use shared_bus::DEFAULT_CHANNEL_CAPACITY;
use timelock_telemetry::TelemetryConfig;
use tl_02_timelock_ledger::TimelockConfig;

/// Default stats report period.
pub const DEFAULT_STATS_INTERVAL_SECS: u64 = 60;

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Timelock controller configuration.
    pub timelock: TimelockConfig,
    /// Logging and metrics configuration.
    pub telemetry: TelemetryConfig,
    /// Event bus capacity.
    pub bus_capacity: usize,
    /// Stats report period; `None` disables the reporter.
    pub stats_interval: Option<Duration>,
    /// Snapshot destination on shutdown.
    pub snapshot_path: Option<PathBuf>,
}

impl NodeConfig {
    /// Node configuration with defaults around a controller configuration.
    pub fn new(timelock: TimelockConfig) -> Self {
        Self {
            timelock,
            telemetry: TelemetryConfig::default(),
            bus_capacity: DEFAULT_CHANNEL_CAPACITY,
            stats_interval: Some(Duration::from_secs(DEFAULT_STATS_INTERVAL_SECS)),
            snapshot_path: None,
        }
    }

    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let timelock = TimelockConfig::from_env().context("Invalid timelock configuration")?;
        let mut config = Self::from_lookup(timelock, |key| env::var(key).ok())?;
        config.telemetry = TelemetryConfig::from_env();
        Ok(config)
    }

    /// Load runtime parameters from an arbitrary key lookup.
    pub fn from_lookup<F>(timelock: TimelockConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(timelock);

        if let Some(raw) = lookup("TL_BUS_CAPACITY") {
            let capacity: usize = raw
                .trim()
                .parse()
                .with_context(|| format!("TL_BUS_CAPACITY is not a number: {raw}"))?;
            anyhow::ensure!(capacity > 0, "TL_BUS_CAPACITY must be positive");
            config.bus_capacity = capacity;
        }

        if let Some(raw) = lookup("TL_STATS_INTERVAL_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("TL_STATS_INTERVAL_SECS is not a number: {raw}"))?;
            config.stats_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }

        config.snapshot_path = lookup("TL_SNAPSHOT_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}
