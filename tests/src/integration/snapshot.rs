//! # Snapshot Export/Restore
//!
//! A restored controller must answer every query exactly like the original
//! and keep assigning fresh identifiers.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::fixtures::{owner, TestNode, TestService, MIN_DELAY};
    use shared_bus::InMemoryEventBus;
    use shared_types::entities::{OperationId, U256};
    use tl_01_operation_registry::OperationStatus;
    use tl_02_timelock_ledger::{
        InMemoryLedger, SingleOwner, TimelockConfig, TimelockLedgerApi, TimelockLedgerError,
        TimelockLedgerService, TimelockSnapshot,
    };

    fn restore(node: &TestNode, snapshot: TimelockSnapshot) -> Result<TestService, TimelockLedgerError> {
        let ledger = InMemoryLedger::new()
            .with_balance(owner(), node.service.balance_of(&owner()))
            .expect("balance fits");
        TimelockLedgerService::restore(
            TimelockConfig::new(owner()).with_min_delay(MIN_DELAY),
            snapshot,
            ledger,
            Arc::clone(&node.clock),
            SingleOwner::new(owner()),
            Arc::new(InMemoryEventBus::new()),
        )
    }

    #[test]
    fn test_round_trip_preserves_observable_state() {
        let node = TestNode::new();
        let done = node.service.request_issue(owner(), U256::from(100)).unwrap();
        let cancelled = node.service.request_issue(owner(), U256::from(1)).unwrap();
        node.service.cancel(owner(), cancelled).unwrap();
        node.clock.set(MIN_DELAY);
        node.service.execute_request(owner(), done).unwrap();
        let pending = node.service.request_redeem(owner(), U256::from(40)).unwrap();

        let json = node.service.snapshot().to_json().unwrap();
        let restored = restore(&node, TimelockSnapshot::from_json(&json).unwrap()).unwrap();

        for id in [done, cancelled, pending, OperationId(99)] {
            assert_eq!(restored.get_timestamp(id), node.service.get_timestamp(id));
            assert_eq!(restored.is_operation(id), node.service.is_operation(id));
            assert_eq!(restored.operation_status(id), node.service.operation_status(id));
        }
        assert_eq!(restored.next_nonce(), 3);

        // Pending work survives the restart.
        node.clock.set(2 * MIN_DELAY);
        restored.execute_request(owner(), pending).unwrap();
        assert_eq!(restored.total_supply(), U256::from(60));
        assert_eq!(restored.operation_status(pending), OperationStatus::Done);

        // Cancelled id stays retired.
        assert_eq!(
            restored.request_issue(owner(), U256::one()).unwrap(),
            OperationId(3)
        );
    }

    #[test]
    fn test_snapshot_json_shape() {
        let node = TestNode::new();
        node.service.request_issue(owner(), U256::from(7)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&node.service.snapshot().to_json().unwrap()).unwrap();

        assert_eq!(value["min_delay"], MIN_DELAY);
        assert_eq!(value["nonce"], 1);
        assert_eq!(value["operations"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_tampered_nonce_rejected() {
        let node = TestNode::new();
        node.service.request_issue(owner(), U256::from(7)).unwrap();

        let mut snapshot = node.service.snapshot();
        snapshot.nonce = 0;

        assert!(matches!(
            restore(&node, snapshot),
            Err(TimelockLedgerError::Snapshot(_))
        ));
    }

    #[test]
    fn test_min_delay_mismatch_rejected() {
        let node = TestNode::new();
        let mut snapshot = node.service.snapshot();
        snapshot.min_delay = 1;

        assert!(matches!(
            restore(&node, snapshot),
            Err(TimelockLedgerError::Config(_))
        ));
    }
}
