//! # Controller Configuration
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TL_MIN_DELAY_SECS` | `86400` | Delay floor in seconds |
//! | `TL_OWNER` | (required) | Owner address, hex with or without `0x` |
//! | `TL_EXECUTION_POLICY` | `owner-only` | `owner-only` or `anyone` |

use serde::{Deserialize, Serialize};
use shared_types::entities::Address;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default delay floor: one day.
pub const DEFAULT_MIN_DELAY_SECS: u64 = 86_400;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No owner address was supplied.
    #[error("owner address is not set (TL_OWNER)")]
    MissingOwner,

    /// Owner could not be parsed, or is the zero address.
    #[error("invalid owner address: {0}")]
    InvalidOwner(String),

    /// Min delay is not an unsigned integer.
    #[error("invalid min delay: {0}")]
    InvalidMinDelay(String),

    /// Unknown execution policy.
    #[error("invalid execution policy: {0} (expected owner-only or anyone)")]
    InvalidPolicy(String),

    /// Authority adapter disagrees with the configured owner.
    #[error("owner mismatch: configured {configured}, authority reports {authority}")]
    OwnerMismatch {
        /// `TimelockConfig::owner`
        configured: Address,
        /// `OwnerAuthority::owner()`
        authority: Address,
    },

    /// Snapshot was taken under a different delay floor.
    #[error("min delay mismatch: configured {configured}s, snapshot {snapshot}s")]
    MinDelayMismatch {
        /// `TimelockConfig::min_delay_secs`
        configured: u64,
        /// `TimelockSnapshot::min_delay`
        snapshot: u64,
    },
}

/// Who may call `execute_request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExecutionPolicy {
    /// Only the owner, like request and cancel.
    #[default]
    OwnerOnly,
    /// Any caller, once the operation is ready.
    Anyone,
}

impl FromStr for ExecutionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "owner-only" | "owner_only" | "owner" => Ok(Self::OwnerOnly),
            "anyone" | "open" => Ok(Self::Anyone),
            other => Err(ConfigError::InvalidPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for ExecutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OwnerOnly => f.write_str("owner-only"),
            Self::Anyone => f.write_str("anyone"),
        }
    }
}

/// Timelock controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelockConfig {
    /// Delay floor in seconds, fixed for the controller's lifetime.
    pub min_delay_secs: u64,
    /// Owner address.
    pub owner: Address,
    /// Execution gating.
    pub execution_policy: ExecutionPolicy,
}

impl Default for TimelockConfig {
    fn default() -> Self {
        Self {
            min_delay_secs: DEFAULT_MIN_DELAY_SECS,
            owner: Address::ZERO,
            execution_policy: ExecutionPolicy::OwnerOnly,
        }
    }
}

impl TimelockConfig {
    /// Default configuration for `owner`.
    #[must_use]
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            ..Self::default()
        }
    }

    /// Set the delay floor.
    #[must_use]
    pub fn with_min_delay(mut self, secs: u64) -> Self {
        self.min_delay_secs = secs;
        self
    }

    /// Set the execution policy.
    #[must_use]
    pub fn with_execution_policy(mut self, policy: ExecutionPolicy) -> Self {
        self.execution_policy = policy;
        self
    }

    /// Load from `TL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup, then validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_delay_secs = match lookup("TL_MIN_DELAY_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidMinDelay(raw))?,
            None => DEFAULT_MIN_DELAY_SECS,
        };

        let owner = lookup("TL_OWNER")
            .ok_or(ConfigError::MissingOwner)?
            .trim()
            .parse::<Address>()
            .map_err(|e| ConfigError::InvalidOwner(e.to_string()))?;

        let execution_policy = match lookup("TL_EXECUTION_POLICY") {
            Some(raw) => raw.parse()?,
            None => ExecutionPolicy::default(),
        };

        let config = Self {
            min_delay_secs,
            owner,
            execution_policy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the controller cannot run with.
    ///
    /// The zero address is the mint source and burn sink, so it cannot own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.is_zero() {
            return Err(ConfigError::InvalidOwner(
                "zero address cannot hold the owner role".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
