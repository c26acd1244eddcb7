//! # Timelock Telemetry
//!
//! Logging and metrics bootstrap for the timelock ledger.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with `EnvFilter`, pretty or JSON output
//! - **Metrics**: Prometheus counters for schedule/execute/cancel/reject
//!
//! ## Usage
//!
//! ```rust,ignore
//! use timelock_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_telemetry(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TL_SERVICE_NAME` | `timelock-ledger` | Service name in logs |
//! | `TL_LOG_LEVEL` | `info` | Log level filter |
//! | `TL_JSON_LOGS` | `false` | JSON log lines |
//! | `TL_METRICS` | `true` | Register Prometheus metrics |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};
pub use metrics::{
    encode_metrics, register_metrics, HistogramTimer, EXECUTION_DURATION, OPERATIONS_CANCELLED,
    OPERATIONS_EXECUTED, OPERATIONS_SCHEDULED, PENDING_OPERATIONS, REQUESTS_REJECTED,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Prometheus registration or encoding failed.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Initialize logging and, if enabled, metrics.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    if config.metrics_enabled {
        register_metrics()?;
    }
    init_logging(config)
}
