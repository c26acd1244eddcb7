//! # Driven Ports (SPI - Outbound)
//!
//! What the controller needs from the outside world:
//! - Ledger state (total supply, balances)
//! - The owner capability
//! - Current time
//!
//! Notifications go through `shared_bus::EventPublisher`.

use shared_types::entities::{Address, Timestamp, U256};
use std::sync::Arc;

// =============================================================================
// SUPPLY LEDGER
// =============================================================================

/// Base fungible-ledger state the controller mutates on execution.
///
/// Accessed only under the controller's exclusive section, so setters take
/// `&mut self` and never fail.
pub trait SupplyLedger: Send {
    /// Current total supply.
    fn total_supply(&self) -> U256;

    /// Balance of `account` (zero if never credited).
    fn balance_of(&self, account: &Address) -> U256;

    /// Overwrite the total supply.
    fn set_total_supply(&mut self, value: U256);

    /// Overwrite the balance of `account`.
    fn set_balance(&mut self, account: Address, value: U256);
}

// =============================================================================
// OWNER AUTHORITY
// =============================================================================

/// Single privileged role gating request, cancel and execute.
pub trait OwnerAuthority: Send + Sync {
    /// Holder of the owner role; issued and redeemed amounts move through
    /// this account.
    fn owner(&self) -> Address;

    /// Check whether `caller` holds the owner role.
    fn is_owner(&self, caller: &Address) -> bool {
        *caller == self.owner()
    }
}

impl<A: OwnerAuthority + ?Sized> OwnerAuthority for Arc<A> {
    fn owner(&self) -> Address {
        (**self).owner()
    }

    fn is_owner(&self, caller: &Address) -> bool {
        (**self).is_owner(caller)
    }
}

// =============================================================================
// CLOCK
// =============================================================================

/// Source of the current time in seconds.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
