//! # Lifecycle Flows
//!
//! Issue, redeem and cancel end to end through `TimelockLedgerApi`.

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::fixtures::{owner, TestNode, MIN_DELAY};
    use shared_types::entities::{OperationId, OperationKind, U256};
    use tl_01_operation_registry::{OperationStatus, DONE_TIMESTAMP};
    use tl_02_timelock_ledger::{ErrorKind, TimelockLedgerApi, TimelockLedgerError};

    fn kind_of<T>(result: Result<T, TimelockLedgerError>) -> Option<ErrorKind> {
        result.err().and_then(|e| e.kind())
    }

    #[test]
    fn test_issue_waits_out_the_delay() {
        let node = TestNode::new();

        let id = node.service.request_issue(owner(), U256::from(100)).unwrap();
        assert_eq!(id, OperationId(0));
        assert_eq!(node.service.get_timestamp(id), MIN_DELAY);

        node.clock.set(MIN_DELAY - 1);
        assert_eq!(
            kind_of(node.service.execute_request(owner(), id)),
            Some(ErrorKind::NotReady)
        );
        assert!(node.service.total_supply().is_zero());

        node.clock.set(MIN_DELAY);
        node.service.execute_request(owner(), id).unwrap();
        assert_eq!(node.service.total_supply(), U256::from(100));
        assert_eq!(node.service.balance_of(&owner()), U256::from(100));
        assert_eq!(node.service.get_timestamp(id), DONE_TIMESTAMP);
    }

    #[test]
    fn test_issue_then_redeem_round_trip() {
        let node = TestNode::new();

        let issue = node.service.request_issue(owner(), U256::from(500)).unwrap();
        node.clock.advance(MIN_DELAY);
        node.service.execute_request(owner(), issue).unwrap();

        let redeem = node.service.request_redeem(owner(), U256::from(200)).unwrap();
        assert_eq!(redeem, OperationId(1));
        assert_eq!(node.service.get_timestamp(redeem), 2 * MIN_DELAY);

        node.clock.advance(MIN_DELAY);
        node.service.execute_request(owner(), redeem).unwrap();

        assert_eq!(node.service.total_supply(), U256::from(300));
        assert_eq!(node.service.balance_of(&owner()), U256::from(300));
    }

    #[test]
    fn test_redeem_is_checked_at_execution_not_request() {
        let node = TestNode::new();

        // Requesting more than the balance is allowed...
        let redeem = node.service.request_redeem(owner(), U256::from(50)).unwrap();
        // ...and an issue landing first can make it executable.
        let issue = node.service.request_issue(owner(), U256::from(50)).unwrap();
        node.clock.set(MIN_DELAY);

        assert_eq!(
            kind_of(node.service.execute_request(owner(), redeem)),
            Some(ErrorKind::InsufficientBalance)
        );
        node.service.execute_request(owner(), issue).unwrap();
        node.service.execute_request(owner(), redeem).unwrap();

        assert!(node.service.total_supply().is_zero());
        assert!(node.service.is_operation_done(redeem));
    }

    #[test]
    fn test_cancel_during_window() {
        let node = TestNode::builder()
            .owner_balance(U256::from(1_000))
            .build();

        let id = node.service.request_redeem(owner(), U256::from(1_000)).unwrap();
        node.clock.set(MIN_DELAY / 2);
        node.service.cancel(owner(), id).unwrap();

        node.clock.set(MIN_DELAY * 10);
        assert_eq!(
            kind_of(node.service.execute_request(owner(), id)),
            Some(ErrorKind::UnknownOperation)
        );
        assert_eq!(node.service.total_supply(), U256::from(1_000));
        assert_eq!(node.service.operation_status(id), OperationStatus::Unset);
    }

    #[test]
    fn test_cancel_after_ready_but_before_execute() {
        let node = TestNode::new();
        let id = node.service.request_issue(owner(), U256::from(1)).unwrap();
        node.clock.set(MIN_DELAY + 1);
        assert!(node.service.is_operation_ready(id));

        node.service.cancel(owner(), id).unwrap();
        assert!(!node.service.is_operation(id));
    }

    #[test]
    fn test_status_progression() {
        let node = TestNode::new();
        let id = OperationId(0);
        assert_eq!(node.service.operation_status(id), OperationStatus::Unset);

        node.service.request_issue(owner(), U256::from(1)).unwrap();
        assert_eq!(node.service.operation_status(id), OperationStatus::Pending);

        node.clock.set(MIN_DELAY);
        assert_eq!(node.service.operation_status(id), OperationStatus::Ready);

        node.service.execute_request(owner(), id).unwrap();
        assert_eq!(node.service.operation_status(id), OperationStatus::Done);
    }

    #[test]
    fn test_ids_interleave_across_kinds() {
        let node = TestNode::new();
        let ids: Vec<_> = (0u64..6)
            .map(|i| {
                if i % 2 == 0 {
                    node.service.request_issue(owner(), U256::from(i)).unwrap()
                } else {
                    node.service.request_redeem(owner(), U256::from(i)).unwrap()
                }
            })
            .collect();

        assert_eq!(ids, (0u64..6).map(OperationId).collect::<Vec<_>>());
        assert_eq!(node.service.pending_operations(), ids);
    }

    /// Random request/cancel/execute sequences against a simple model:
    /// supply always equals executed issues minus executed redeems.
    #[test]
    fn test_random_sequences_keep_supply_consistent() {
        let mut rng = StdRng::seed_from_u64(0x7157);

        for _ in 0..20 {
            let node = TestNode::new();
            let mut expected_supply = U256::zero();
            let mut known: Vec<OperationId> = Vec::new();

            for _ in 0..200 {
                match rng.gen_range(0..4) {
                    0 => {
                        let amount = U256::from(rng.gen_range(1u64..1_000));
                        known.push(node.service.request_issue(owner(), amount).unwrap());
                    }
                    1 => {
                        let amount = U256::from(rng.gen_range(1u64..1_000));
                        known.push(node.service.request_redeem(owner(), amount).unwrap());
                    }
                    2 if !known.is_empty() => {
                        let id = known[rng.gen_range(0..known.len())];
                        let pending = node.service.is_operation_pending(id);
                        assert_eq!(node.service.cancel(owner(), id).is_ok(), pending);
                    }
                    _ if !known.is_empty() => {
                        let id = known[rng.gen_range(0..known.len())];
                        let before = node.service.get_operation(id);
                        if node.service.execute_request(owner(), id).is_ok() {
                            let op = before.expect("executed op existed");
                            match op.kind {
                                OperationKind::Issue => expected_supply += op.amount,
                                OperationKind::Redeem => expected_supply -= op.amount,
                            }
                        }
                    }
                    _ => {}
                }
                node.clock.advance(rng.gen_range(0..MIN_DELAY / 2));

                assert_eq!(node.service.total_supply(), expected_supply);
                assert_eq!(node.service.balance_of(&owner()), expected_supply);
            }

            assert_eq!(node.service.next_nonce(), known.len() as u64);
        }
    }
}
