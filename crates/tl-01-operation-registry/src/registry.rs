//! # Operation Registry
//!
//! Keyed store `OperationId → Operation` plus the delay floor.
//!
//! Every mutating method either applies fully or returns an error with the
//! store untouched. The registry does not lock: the owner serialises access.

use crate::domain::{
    compute_ready_at, invariant_min_delay, invariant_unregistered, Operation, OperationStatus,
    RegistryError, UNSET_TIMESTAMP,
};
use shared_types::entities::{OperationId, OperationKind, Timestamp, U256};
use shared_types::events::{CallScheduled, Cancelled};
use std::collections::BTreeMap;

/// Lifecycle store for timelocked operations.
#[derive(Clone, Debug, Default)]
pub struct OperationRegistry {
    min_delay: u64,
    operations: BTreeMap<OperationId, Operation>,
}

impl OperationRegistry {
    /// Create an empty registry with a fixed delay floor.
    pub fn new(min_delay: u64) -> Self {
        Self {
            min_delay,
            operations: BTreeMap::new(),
        }
    }

    /// Rebuild a registry from previously stored records.
    ///
    /// Fails with `AlreadyScheduled` if two records share an identifier.
    pub fn from_operations(
        min_delay: u64,
        operations: impl IntoIterator<Item = Operation>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new(min_delay);
        for op in operations {
            invariant_unregistered(op.id, registry.is_registered(op.id))?;
            registry.operations.insert(op.id, op);
        }
        Ok(registry)
    }

    /// Configured minimum delay in seconds.
    pub fn min_delay(&self) -> u64 {
        self.min_delay
    }

    /// Register a new pending operation ready at `now + delay`.
    ///
    /// Returns the scheduling notification for the caller to publish.
    pub fn schedule(
        &mut self,
        id: OperationId,
        kind: OperationKind,
        amount: U256,
        delay: u64,
        now: Timestamp,
    ) -> Result<CallScheduled, RegistryError> {
        invariant_unregistered(id, self.is_registered(id))?;
        invariant_min_delay(delay, self.min_delay)?;
        let ready_at = compute_ready_at(now, delay)?;

        self.operations
            .insert(id, Operation::pending(id, kind, amount, ready_at));

        Ok(CallScheduled {
            id,
            kind,
            amount,
            ready_at,
        })
    }

    /// True if a record exists, pending or done.
    pub fn is_registered(&self, id: OperationId) -> bool {
        self.operations.contains_key(&id)
    }

    /// True if registered and not yet executed.
    pub fn is_pending(&self, id: OperationId) -> bool {
        self.operations.get(&id).is_some_and(Operation::is_pending)
    }

    /// True if pending and `ready_at <= now`.
    pub fn is_ready(&self, id: OperationId, now: Timestamp) -> bool {
        self.operations.get(&id).is_some_and(|op| op.is_ready(now))
    }

    /// True if executed.
    pub fn is_done(&self, id: OperationId) -> bool {
        self.operations.get(&id).is_some_and(Operation::is_done)
    }

    /// Move a ready operation to `Done`.
    ///
    /// Not repeatable: a second call fails with `NotReady`.
    pub fn mark_done(&mut self, id: OperationId, now: Timestamp) -> Result<(), RegistryError> {
        self.operations
            .get_mut(&id)
            .ok_or(RegistryError::NotReady(id))?
            .mark_done(now)
    }

    /// Remove a pending operation, returning its identifier to `Unset`.
    pub fn cancel(&mut self, id: OperationId) -> Result<Cancelled, RegistryError> {
        if !self.is_pending(id) {
            return Err(RegistryError::NotCancellable(id));
        }
        self.operations.remove(&id);
        Ok(Cancelled { id })
    }

    /// Stored record, if any.
    pub fn get(&self, id: OperationId) -> Option<&Operation> {
        self.operations.get(&id)
    }

    /// Observable timestamp: `0` unset, `1` done, otherwise the ready time.
    pub fn timestamp(&self, id: OperationId) -> Timestamp {
        self.operations
            .get(&id)
            .map_or(UNSET_TIMESTAMP, Operation::timestamp)
    }

    /// Lifecycle status of `id` at `now`.
    pub fn status(&self, id: OperationId, now: Timestamp) -> OperationStatus {
        self.operations
            .get(&id)
            .map_or(OperationStatus::Unset, |op| op.status(now))
    }

    /// Identifiers still pending, ascending.
    pub fn pending_ids(&self) -> Vec<OperationId> {
        self.operations
            .values()
            .filter(|op| op.is_pending())
            .map(|op| op.id)
            .collect()
    }

    /// All stored records, ascending by identifier.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// True if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
