//! # Timing Attacks
//!
//! Executing inside the observation window, shrinking the delay, or
//! overflowing the ready time.

#[cfg(test)]
mod tests {
    use crate::fixtures::{attacker, owner, TestNode, MIN_DELAY};
    use shared_types::entities::{OperationId, OperationKind, U256};
    use tl_01_operation_registry::{OperationRegistry, RegistryError};
    use tl_02_timelock_ledger::{ErrorKind, TimelockLedgerApi};

    #[test]
    fn test_every_second_of_the_window_is_guarded() {
        let node = TestNode::builder().start_at(1_000).build();
        let id = node.service.request_issue(owner(), U256::from(1)).unwrap();
        assert_eq!(node.service.get_timestamp(id), 1_000 + MIN_DELAY);

        for t in 1_000..1_000 + MIN_DELAY {
            node.clock.set(t);
            assert!(!node.service.is_operation_ready(id));
            assert_eq!(
                node.service.execute_request(owner(), id).unwrap_err().kind(),
                Some(ErrorKind::NotReady)
            );
        }
        assert!(node.service.total_supply().is_zero());

        node.clock.set(1_000 + MIN_DELAY);
        node.service.execute_request(owner(), id).unwrap();
    }

    #[test]
    fn test_clock_rewind_does_not_unlock() {
        let node = TestNode::builder().start_at(500).build();
        let id = node.service.request_issue(owner(), U256::from(1)).unwrap();

        node.clock.set(0);
        assert_eq!(
            node.service.execute_request(owner(), id).unwrap_err().kind(),
            Some(ErrorKind::NotReady)
        );
    }

    #[test]
    fn test_registry_delay_floor() {
        let mut registry = OperationRegistry::new(MIN_DELAY);
        assert_eq!(
            registry.schedule(
                OperationId(0),
                OperationKind::Issue,
                U256::one(),
                MIN_DELAY - 1,
                0
            ),
            Err(RegistryError::InsufficientDelay {
                delay: MIN_DELAY - 1,
                min_delay: MIN_DELAY,
            })
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_ready_time_overflow_fails_closed() {
        let node = TestNode::builder().start_at(u64::MAX - MIN_DELAY + 1).build();

        assert_eq!(
            node.service
                .request_issue(owner(), U256::one())
                .unwrap_err()
                .kind(),
            Some(ErrorKind::ArithmeticOverflow)
        );
        assert_eq!(node.service.next_nonce(), 0);
    }

    #[test]
    fn test_outsider_cannot_schedule_or_cancel() {
        let node = TestNode::new();
        let id = node.service.request_issue(owner(), U256::from(1)).unwrap();

        assert_eq!(
            node.service
                .request_issue(attacker(), U256::MAX)
                .unwrap_err()
                .kind(),
            Some(ErrorKind::Unauthorized)
        );
        assert_eq!(
            node.service.cancel(attacker(), id).unwrap_err().kind(),
            Some(ErrorKind::Unauthorized)
        );
        assert!(node.service.is_operation_pending(id));
        assert_eq!(node.service.next_nonce(), 1);
    }

    #[test]
    fn test_supply_overflow_fails_closed() {
        let node = TestNode::builder().owner_balance(U256::MAX).build();
        let id = node.service.request_issue(owner(), U256::one()).unwrap();
        node.clock.set(MIN_DELAY);

        assert_eq!(
            node.service.execute_request(owner(), id).unwrap_err().kind(),
            Some(ErrorKind::ArithmeticOverflow)
        );
        assert_eq!(node.service.total_supply(), U256::MAX);
        assert!(node.service.is_operation_pending(id));
    }
}
