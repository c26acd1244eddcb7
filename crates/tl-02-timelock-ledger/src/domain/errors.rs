//! # Error Types
//!
//! All error types for the timelock ledger controller.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use shared_types::entities::{Address, OperationId, U256};
use std::fmt;
use thiserror::Error;
use tl_01_operation_registry::RegistryError;

// =============================================================================
// CONTROLLER ERRORS
// =============================================================================

/// Errors returned by the ledger controller.
///
/// Every mutating entry point leaves registry, ledger and nonce untouched when
/// it returns one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimelockLedgerError {
    /// Caller does not hold the required capability.
    #[error("unauthorized caller: {caller}")]
    Unauthorized {
        /// Rejected caller.
        caller: Address,
    },

    /// Execution requested for an identifier with no record.
    #[error("unknown operation: {0}")]
    UnknownOperation(OperationId),

    /// Redeem would take the owner balance below zero.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Amount to burn.
        required: U256,
        /// Owner balance at execution time.
        available: U256,
    },

    /// A supply or balance computation does not fit in 256 bits.
    #[error("arithmetic overflow in {0}")]
    ArithmeticOverflow(&'static str),

    /// Lifecycle precondition failed in the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Snapshot could not be encoded, decoded or validated.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),

    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TimelockLedgerError {
    /// Flatten to the rejection taxonomy.
    ///
    /// `None` for snapshot and configuration failures, which never come out
    /// of a request/cancel/execute call.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        let kind = match self {
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::UnknownOperation(_) => ErrorKind::UnknownOperation,
            Self::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            Self::ArithmeticOverflow(_) => ErrorKind::ArithmeticOverflow,
            Self::Registry(err) => match err {
                RegistryError::AlreadyScheduled(_) => ErrorKind::AlreadyScheduled,
                RegistryError::InsufficientDelay { .. } => ErrorKind::InsufficientDelay,
                RegistryError::NotReady(_) => ErrorKind::NotReady,
                RegistryError::NotCancellable(_) => ErrorKind::NotCancellable,
                RegistryError::ArithmeticOverflow { .. } => ErrorKind::ArithmeticOverflow,
            },
            Self::Snapshot(_) | Self::Config(_) => return None,
        };
        Some(kind)
    }
}

// =============================================================================
// ERROR KIND
// =============================================================================

/// Flat rejection taxonomy shared by every entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Caller lacks the owner capability.
    Unauthorized,
    /// Identifier already has a record.
    AlreadyScheduled,
    /// Delay below the configured floor.
    InsufficientDelay,
    /// Identifier has no record.
    UnknownOperation,
    /// Not pending, or ready time not reached.
    NotReady,
    /// Only pending operations can be cancelled.
    NotCancellable,
    /// Redeem exceeds the owner balance.
    InsufficientBalance,
    /// Checked arithmetic failed.
    ArithmeticOverflow,
}

impl ErrorKind {
    /// Snake-case label, used for metric labels and log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::AlreadyScheduled => "already_scheduled",
            Self::InsufficientDelay => "insufficient_delay",
            Self::UnknownOperation => "unknown_operation",
            Self::NotReady => "not_ready",
            Self::NotCancellable => "not_cancellable",
            Self::InsufficientBalance => "insufficient_balance",
            Self::ArithmeticOverflow => "arithmetic_overflow",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
