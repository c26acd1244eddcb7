//! # Supply Effect
//!
//! What an operation does to the ledger, computed before anything is written.

use super::errors::TimelockLedgerError;
use shared_types::entities::{Address, OperationKind, U256};
use shared_types::events::Transfer;

/// New supply and owner balance an execution would commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyEffect {
    /// Total supply after execution.
    pub total_supply: U256,
    /// Owner balance after execution.
    pub owner_balance: U256,
    /// Holder-visible mint or burn.
    pub transfer: Transfer,
}

/// Compute the effect of `kind`/`amount` on the current supply and balance.
///
/// Pure: fails closed on any underflow or overflow.
pub fn compute_effect(
    kind: OperationKind,
    amount: U256,
    total_supply: U256,
    owner_balance: U256,
    owner: Address,
) -> Result<SupplyEffect, TimelockLedgerError> {
    match kind {
        OperationKind::Issue => Ok(SupplyEffect {
            total_supply: total_supply
                .checked_add(amount)
                .ok_or(TimelockLedgerError::ArithmeticOverflow("total supply"))?,
            owner_balance: owner_balance
                .checked_add(amount)
                .ok_or(TimelockLedgerError::ArithmeticOverflow("owner balance"))?,
            transfer: Transfer::mint(owner, amount),
        }),
        OperationKind::Redeem => {
            let owner_balance = owner_balance.checked_sub(amount).ok_or(
                TimelockLedgerError::InsufficientBalance {
                    required: amount,
                    available: owner_balance,
                },
            )?;
            // Balance is bounded by supply on a consistent ledger.
            let total_supply = total_supply
                .checked_sub(amount)
                .ok_or(TimelockLedgerError::ArithmeticOverflow("total supply"))?;
            Ok(SupplyEffect {
                total_supply,
                owner_balance,
                transfer: Transfer::burn(owner, amount),
            })
        }
    }
}
