//! # Domain Invariants
//!
//! Business rules checked before the registry mutates a record.

use super::errors::RegistryError;
use shared_types::entities::{OperationId, Timestamp};

/// Invariant: delay floor.
///
/// Every schedule must leave holders at least `min_delay` seconds to react.
pub fn invariant_min_delay(delay: u64, min_delay: u64) -> Result<(), RegistryError> {
    if delay < min_delay {
        return Err(RegistryError::InsufficientDelay { delay, min_delay });
    }
    Ok(())
}

/// Invariant: single schedule per identifier.
pub fn invariant_unregistered(id: OperationId, registered: bool) -> Result<(), RegistryError> {
    if registered {
        return Err(RegistryError::AlreadyScheduled(id));
    }
    Ok(())
}

/// Ready time for an operation scheduled at `now` with `delay`.
///
/// Fails closed instead of wrapping.
pub fn compute_ready_at(now: Timestamp, delay: u64) -> Result<Timestamp, RegistryError> {
    now.checked_add(delay)
        .ok_or(RegistryError::ArithmeticOverflow { now, delay })
}
