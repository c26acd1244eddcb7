//! # Driving Ports (API - Inbound)
//!
//! The public surface of the timelock ledger controller.

use crate::domain::TimelockLedgerError;
use shared_types::entities::{Address, OperationId, Timestamp, U256};

/// Timelocked issue/redeem controller.
///
/// Every method runs to completion without interleaving with any other call
/// on the same controller.
pub trait TimelockLedgerApi: Send + Sync {
    /// Schedule minting `amount` to the owner. Owner only.
    ///
    /// # Returns
    ///
    /// The identifier assigned from the shared nonce.
    fn request_issue(&self, caller: Address, amount: U256)
        -> Result<OperationId, TimelockLedgerError>;

    /// Schedule burning `amount` from the owner. Owner only.
    ///
    /// The balance is checked at execution, not here.
    fn request_redeem(
        &self,
        caller: Address,
        amount: U256,
    ) -> Result<OperationId, TimelockLedgerError>;

    /// Cancel a pending operation. Owner only.
    fn cancel(&self, caller: Address, id: OperationId) -> Result<(), TimelockLedgerError>;

    /// Apply a ready operation to the ledger exactly once.
    fn execute_request(&self, caller: Address, id: OperationId)
        -> Result<(), TimelockLedgerError>;

    /// Record exists (pending or done).
    fn is_operation(&self, id: OperationId) -> bool;

    /// Scheduled and not yet executed.
    fn is_operation_pending(&self, id: OperationId) -> bool;

    /// Pending and ready time reached.
    fn is_operation_ready(&self, id: OperationId) -> bool;

    /// Executed.
    fn is_operation_done(&self, id: OperationId) -> bool;

    /// `0` unset, `1` done, otherwise the ready time.
    fn get_timestamp(&self, id: OperationId) -> Timestamp;

    /// Delay floor in seconds.
    fn get_min_delay(&self) -> u64;
}
