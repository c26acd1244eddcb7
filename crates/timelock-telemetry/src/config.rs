//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to log lines
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Whether to register Prometheus metrics
    pub metrics_enabled: bool,

    /// Network identifier (devnet, testnet, mainnet)
    pub network: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "timelock-ledger".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            metrics_enabled: true,
            network: "devnet".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TL_SERVICE_NAME`: Service name (default: timelock-ledger)
    /// - `TL_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `TL_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `TL_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    /// - `TL_METRICS`: Register Prometheus metrics (default: true)
    /// - `TL_NETWORK`: Network name (default: devnet)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("TL_SERVICE_NAME")
                .unwrap_or_else(|_| "timelock-ledger".to_string()),

            log_level: env::var("TL_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("TL_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),

            json_logs: env::var("TL_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(is_container),

            metrics_enabled: env::var("TL_METRICS")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),

            network: env::var("TL_NETWORK").unwrap_or_else(|_| "devnet".to_string()),
        }
    }

    /// Full service name including network.
    pub fn full_service_name(&self) -> String {
        format!("{}-{}", self.service_name, self.network)
    }
}

/// `"false"`, `"0"`, `"no"` and `"off"` are false; anything else is true.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
