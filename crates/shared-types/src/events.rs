//! # Notification Payloads
//!
//! Every notification the timelock emits. The registry produces
//! `CallScheduled` and `Cancelled`; the ledger controller produces the rest.
//! `shared-bus` wraps these in `TimelockEvent` for transport.

use crate::entities::{Address, OperationId, OperationKind, Timestamp, U256};
use serde::{Deserialize, Serialize};

/// An operation entered the pending state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallScheduled {
    /// Assigned identifier.
    pub id: OperationId,
    /// Issue or redeem.
    pub kind: OperationKind,
    /// Quantity to mint or burn.
    pub amount: U256,
    /// Earliest time at which execution is permitted.
    pub ready_at: Timestamp,
}

/// An operation was executed and is now done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExecuted {
    /// Executed identifier.
    pub id: OperationId,
    /// Issue or redeem.
    pub kind: OperationKind,
    /// Quantity minted or burned.
    pub amount: U256,
}

/// A pending operation was cancelled and removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancelled {
    /// Cancelled identifier.
    pub id: OperationId,
}

/// The minimum delay changed. Emitted once at construction with
/// `old_duration == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinDelayChange {
    /// Previous delay in seconds.
    pub old_duration: u64,
    /// New delay in seconds.
    pub new_duration: u64,
}

/// Balance movement as seen by ledger holders.
///
/// Mints come from `Address::ZERO`, burns go to `Address::ZERO`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Debited account.
    pub from: Address,
    /// Credited account.
    pub to: Address,
    /// Quantity moved.
    pub value: U256,
}

impl Transfer {
    /// Transfer record for a mint to `to`.
    #[must_use]
    pub fn mint(to: Address, value: U256) -> Self {
        Self {
            from: Address::ZERO,
            to,
            value,
        }
    }

    /// Transfer record for a burn from `from`.
    #[must_use]
    pub fn burn(from: Address, value: U256) -> Self {
        Self {
            from,
            to: Address::ZERO,
            value,
        }
    }

    /// True if this records a mint.
    #[must_use]
    pub fn is_mint(&self) -> bool {
        self.from.is_zero()
    }

    /// True if this records a burn.
    #[must_use]
    pub fn is_burn(&self) -> bool {
        self.to.is_zero()
    }
}
