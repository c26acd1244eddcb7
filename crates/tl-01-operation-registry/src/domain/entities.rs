//! # Domain Entities
//!
//! The scheduled `Operation` and its lifecycle state.
//!
//! ## State Machine
//!
//! ```text
//!   Unset ──schedule──→ Pending ──(now ≥ ready_at)──→ Ready ──mark_done──→ Done
//!     ↑                    │
//!     └──────cancel────────┘
//! ```
//!
//! `Unset` is the absence of a record and `Ready` is derived from the clock,
//! so only `Pending` and `Done` are ever stored.

use super::errors::RegistryError;
use serde::{Deserialize, Serialize};
use shared_types::entities::{OperationId, OperationKind, Timestamp, U256};

/// Observable timestamp of an identifier that was never scheduled.
pub const UNSET_TIMESTAMP: Timestamp = 0;

/// Observable timestamp of an executed operation.
///
/// The smallest non-zero value, so it can never be confused with "unset".
pub const DONE_TIMESTAMP: Timestamp = 1;

/// Stored lifecycle state of a registered operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationState {
    /// Waiting for `ready_at`.
    Pending {
        /// Earliest execution time.
        ready_at: Timestamp,
    },
    /// Executed. Terminal.
    Done,
}

/// Lifecycle status of an identifier at a given time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationStatus {
    /// Never scheduled, or cancelled.
    Unset,
    /// Scheduled, ready time not reached.
    Pending,
    /// Scheduled and ready time reached.
    Ready,
    /// Executed.
    Done,
}

impl OperationStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: OperationStatus) -> bool {
        match (self, next) {
            (Self::Unset, Self::Pending) => true,
            (Self::Pending, Self::Ready) => true,
            (Self::Pending, Self::Unset) => true, // cancel
            (Self::Ready, Self::Unset) => true,   // cancel while ready
            (Self::Ready, Self::Done) => true,
            _ => false,
        }
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// One scheduled supply mutation.
///
/// `kind` and `amount` are fixed at scheduling; only `state` moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identifier.
    pub id: OperationId,
    /// Issue or redeem.
    pub kind: OperationKind,
    /// Quantity to mint or burn.
    pub amount: U256,
    /// Current stored state.
    pub state: OperationState,
}

impl Operation {
    /// Create a pending operation.
    pub fn pending(id: OperationId, kind: OperationKind, amount: U256, ready_at: Timestamp) -> Self {
        Self {
            id,
            kind,
            amount,
            state: OperationState::Pending { ready_at },
        }
    }

    /// Ready time while pending, `None` once done.
    pub fn ready_at(&self) -> Option<Timestamp> {
        match self.state {
            OperationState::Pending { ready_at } => Some(ready_at),
            OperationState::Done => None,
        }
    }

    /// Check if not yet executed.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, OperationState::Pending { .. })
    }

    /// Check if pending and the ready time has been reached.
    pub fn is_ready(&self, current_time: Timestamp) -> bool {
        self.ready_at()
            .is_some_and(|ready_at| ready_at <= current_time)
    }

    /// Check if executed.
    pub fn is_done(&self) -> bool {
        self.state == OperationState::Done
    }

    /// Observable timestamp: the ready time, or `DONE_TIMESTAMP`.
    pub fn timestamp(&self) -> Timestamp {
        self.ready_at().unwrap_or(DONE_TIMESTAMP)
    }

    /// Status at `current_time`.
    pub fn status(&self, current_time: Timestamp) -> OperationStatus {
        match self.state {
            OperationState::Done => OperationStatus::Done,
            OperationState::Pending { ready_at } if ready_at <= current_time => {
                OperationStatus::Ready
            }
            OperationState::Pending { .. } => OperationStatus::Pending,
        }
    }

    /// Move to `Done`. Fails unless ready at `current_time`.
    pub fn mark_done(&mut self, current_time: Timestamp) -> Result<(), RegistryError> {
        if !self
            .status(current_time)
            .can_transition_to(OperationStatus::Done)
        {
            return Err(RegistryError::NotReady(self.id));
        }
        self.state = OperationState::Done;
        Ok(())
    }
}
