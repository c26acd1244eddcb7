//! # Timelock State
//!
//! Registry, ledger and nonce: the single unit the controller locks.
//!
//! Methods here do no locking, logging or publishing. Each one either applies
//! fully and returns the notifications to emit, or fails with state untouched.

use super::effect::compute_effect;
use super::errors::TimelockLedgerError;
use crate::ports::outbound::SupplyLedger;
use serde::{Deserialize, Serialize};
use shared_types::entities::{Address, OperationId, OperationKind, Timestamp, U256};
use shared_types::events::{CallExecuted, CallScheduled, Cancelled, Transfer};
use tl_01_operation_registry::{Operation, OperationRegistry, RegistryError};

/// Mutable controller state.
#[derive(Debug)]
pub struct TimelockState<L> {
    registry: OperationRegistry,
    ledger: L,
    nonce: u64,
}

impl<L: SupplyLedger> TimelockState<L> {
    /// Fresh state: empty registry, nonce zero.
    pub fn new(min_delay: u64, ledger: L) -> Self {
        Self {
            registry: OperationRegistry::new(min_delay),
            ledger,
            nonce: 0,
        }
    }

    /// Rebuild from a snapshot over an existing ledger.
    pub fn restore(snapshot: TimelockSnapshot, ledger: L) -> Result<Self, TimelockLedgerError> {
        snapshot.validate()?;
        let registry = OperationRegistry::from_operations(snapshot.min_delay, snapshot.operations)?;
        Ok(Self {
            registry,
            ledger,
            nonce: snapshot.nonce,
        })
    }

    /// Export the ledger-agnostic part of the state.
    pub fn snapshot(&self) -> TimelockSnapshot {
        TimelockSnapshot {
            min_delay: self.registry.min_delay(),
            nonce: self.nonce,
            operations: self.registry.operations().cloned().collect(),
        }
    }

    /// Schedule `kind`/`amount` under the next nonce with the minimum delay.
    ///
    /// The nonce only advances if the registry accepts the operation.
    pub fn schedule_next(
        &mut self,
        kind: OperationKind,
        amount: U256,
        now: Timestamp,
    ) -> Result<CallScheduled, TimelockLedgerError> {
        let id = OperationId(self.nonce);
        let next_nonce = self
            .nonce
            .checked_add(1)
            .ok_or(TimelockLedgerError::ArithmeticOverflow("nonce"))?;
        let min_delay = self.registry.min_delay();

        let scheduled = self.registry.schedule(id, kind, amount, min_delay, now)?;
        self.nonce = next_nonce;
        Ok(scheduled)
    }

    /// Remove a pending operation.
    pub fn cancel(&mut self, id: OperationId) -> Result<Cancelled, TimelockLedgerError> {
        Ok(self.registry.cancel(id)?)
    }

    /// Apply a ready operation to the ledger and mark it done.
    ///
    /// Order of checks: registered, not already done, effect computable,
    /// ready. Writes happen only after every check passes, and the registry
    /// transition to `Done` is the last step.
    pub fn execute(
        &mut self,
        id: OperationId,
        owner: Address,
        now: Timestamp,
    ) -> Result<(CallExecuted, Transfer), TimelockLedgerError> {
        let op = self
            .registry
            .get(id)
            .ok_or(TimelockLedgerError::UnknownOperation(id))?;
        if op.is_done() {
            return Err(RegistryError::NotReady(id).into());
        }
        let (kind, amount, ready) = (op.kind, op.amount, op.is_ready(now));

        let prev_supply = self.ledger.total_supply();
        let prev_balance = self.ledger.balance_of(&owner);
        let effect = compute_effect(kind, amount, prev_supply, prev_balance, owner)?;

        if !ready {
            return Err(RegistryError::NotReady(id).into());
        }

        self.ledger.set_total_supply(effect.total_supply);
        self.ledger.set_balance(owner, effect.owner_balance);

        if let Err(err) = self.registry.mark_done(id, now) {
            self.ledger.set_total_supply(prev_supply);
            self.ledger.set_balance(owner, prev_balance);
            return Err(err.into());
        }

        Ok((CallExecuted { id, kind, amount }, effect.transfer))
    }

    /// Operation registry (read-only).
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// Ledger (read-only).
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Identifier the next request will receive.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Serializable export of the registry and nonce.
///
/// Ledger balances are owned by the base ledger and are not included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelockSnapshot {
    /// Delay floor in seconds.
    pub min_delay: u64,
    /// Next identifier to assign.
    pub nonce: u64,
    /// Stored records, ascending by identifier.
    pub operations: Vec<Operation>,
}

impl TimelockSnapshot {
    /// Every stored identifier must be below the nonce, or a future request
    /// would collide with it.
    pub fn validate(&self) -> Result<(), TimelockLedgerError> {
        match self.operations.iter().find(|op| op.id.value() >= self.nonce) {
            Some(op) => Err(TimelockLedgerError::Snapshot(format!(
                "{} is not below nonce {}",
                op.id, self.nonce
            ))),
            None => Ok(()),
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, TimelockLedgerError> {
        serde_json::to_string(self).map_err(|e| TimelockLedgerError::Snapshot(e.to_string()))
    }

    /// Decode from JSON. Does not validate.
    pub fn from_json(json: &str) -> Result<Self, TimelockLedgerError> {
        serde_json::from_str(json).map_err(|e| TimelockLedgerError::Snapshot(e.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
