//! # Ledger Adapter
//!
//! In-memory supply and balances. A production deployment puts the base
//! fungible ledger behind `SupplyLedger` instead.

use crate::ports::outbound::SupplyLedger;
use shared_types::entities::{Address, U256};
use std::collections::HashMap;

/// In-memory ledger state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    /// Total supply.
    total_supply: U256,
    /// Non-zero balances.
    balances: HashMap<Address, U256>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `account` with `balance`, adding it to the total supply.
    ///
    /// `None` if the supply would overflow.
    pub fn with_balance(mut self, account: Address, balance: U256) -> Option<Self> {
        self.total_supply = self.total_supply.checked_add(balance)?;
        let current = self.balance_of(&account);
        self.set_balance(account, current.checked_add(balance)?);
        Some(self)
    }

    /// Number of accounts holding a non-zero balance.
    pub fn holders(&self) -> usize {
        self.balances.len()
    }
}

impl SupplyLedger for InMemoryLedger {
    fn total_supply(&self) -> U256 {
        self.total_supply
    }

    fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn set_total_supply(&mut self, value: U256) {
        self.total_supply = value;
    }

    fn set_balance(&mut self, account: Address, value: U256) {
        if value.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, value);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
