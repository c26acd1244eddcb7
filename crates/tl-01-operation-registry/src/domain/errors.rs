//! # Domain Errors
//!
//! Error types for the Operation Registry.

use shared_types::entities::{OperationId, Timestamp};
use thiserror::Error;

/// Registry error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The identifier already has a record (pending or done).
    #[error("Operation already scheduled: {0}")]
    AlreadyScheduled(OperationId),

    /// Requested delay is below the configured floor.
    #[error("Insufficient delay: {delay}s < minimum {min_delay}s")]
    InsufficientDelay {
        /// Requested delay in seconds
        delay: u64,
        /// Configured minimum delay in seconds
        min_delay: u64,
    },

    /// Operation is not pending or its ready time has not arrived.
    #[error("Operation not ready: {0}")]
    NotReady(OperationId),

    /// Only pending operations can be cancelled.
    #[error("Operation cannot be cancelled: {0}")]
    NotCancellable(OperationId),

    /// `now + delay` does not fit in a timestamp.
    #[error("Arithmetic overflow: ready time {now} + {delay} exceeds u64")]
    ArithmeticOverflow {
        /// Scheduling time
        now: Timestamp,
        /// Requested delay
        delay: u64,
    },
}

impl RegistryError {
    /// The operation this error concerns, if it names one.
    #[must_use]
    pub fn operation_id(&self) -> Option<OperationId> {
        match self {
            Self::AlreadyScheduled(id) | Self::NotReady(id) | Self::NotCancellable(id) => {
                Some(*id)
            }
            Self::InsufficientDelay { .. } | Self::ArithmeticOverflow { .. } => None,
        }
    }
}
