//! # Bus Integration
//!
//! Notifications as seen by independent subscribers.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use crate::fixtures::{owner, TestNode, MIN_DELAY};
    use shared_bus::{EventFilter, EventTopic, TimelockEvent};
    use shared_types::entities::{OperationId, U256};
    use shared_types::events::Transfer;
    use tl_02_timelock_ledger::TimelockLedgerApi;

    #[tokio::test]
    async fn test_subscriber_receives_full_lifecycle() {
        let node = TestNode::new();
        let mut sub = node.subscribe();

        let id = node.service.request_issue(owner(), U256::from(10)).unwrap();
        node.clock.set(MIN_DELAY);
        node.service.execute_request(owner(), id).unwrap();

        let mut received = Vec::new();
        for _ in 0..3 {
            let event = timeout(Duration::from_secs(1), sub.recv())
                .await
                .expect("event within timeout")
                .expect("bus open");
            received.push(event);
        }

        assert!(matches!(received[0], TimelockEvent::CallScheduled(ref e) if e.id == id));
        assert!(matches!(received[1], TimelockEvent::CallExecuted(ref e) if e.id == id));
        assert_eq!(
            received[2],
            TimelockEvent::Transfer(Transfer::mint(owner(), U256::from(10)))
        );
    }

    #[tokio::test]
    async fn test_topic_filter_only_sees_ledger_moves() {
        let node = TestNode::builder()
            .owner_balance(U256::from(5))
            .build();
        let mut ledger_only = node
            .bus
            .subscribe(EventFilter::topics(vec![EventTopic::Ledger]));

        let issue = node.service.request_issue(owner(), U256::from(3)).unwrap();
        let redeem = node.service.request_redeem(owner(), U256::from(8)).unwrap();
        let cancelled = node.service.request_issue(owner(), U256::from(1)).unwrap();
        node.service.cancel(owner(), cancelled).unwrap();
        node.clock.set(MIN_DELAY);
        node.service.execute_request(owner(), issue).unwrap();
        node.service.execute_request(owner(), redeem).unwrap();

        assert_eq!(
            ledger_only.drain(),
            vec![
                TimelockEvent::Transfer(Transfer::mint(owner(), U256::from(3))),
                TimelockEvent::Transfer(Transfer::burn(owner(), U256::from(8))),
            ]
        );
    }

    #[test]
    fn test_event_order_matches_commit_order_under_contention() {
        let node = TestNode::new();
        let mut sub = node.subscribe();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&node.service);
                thread::spawn(move || {
                    for _ in 0..25 {
                        service.request_issue(owner(), U256::one()).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let scheduled: Vec<OperationId> = sub
            .drain()
            .into_iter()
            .filter_map(|e| match e {
                TimelockEvent::CallScheduled(s) => Some(s.id),
                _ => None,
            })
            .collect();

        assert_eq!(scheduled.len(), 200);
        assert!(scheduled.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cancel_and_execute_race_emits_one_outcome() {
        let node = TestNode::new();
        let mut sub = node.subscribe();
        let id = node.service.request_issue(owner(), U256::from(4)).unwrap();
        node.clock.set(MIN_DELAY);

        let a = {
            let service = Arc::clone(&node.service);
            thread::spawn(move || service.cancel(owner(), id).is_ok())
        };
        let b = {
            let service = Arc::clone(&node.service);
            thread::spawn(move || service.execute_request(owner(), id).is_ok())
        };
        let (cancelled, executed) = (a.join().unwrap(), b.join().unwrap());
        assert!(cancelled ^ executed);

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for event in sub.drain() {
            let name = match event {
                TimelockEvent::CallScheduled(_) => "scheduled",
                TimelockEvent::Cancelled(_) => "cancelled",
                TimelockEvent::CallExecuted(_) => "executed",
                TimelockEvent::Transfer(_) => "transfer",
                TimelockEvent::MinDelayChange(_) => "min_delay",
            };
            *counts.entry(name).or_default() += 1;
        }

        assert_eq!(counts.get("scheduled"), Some(&1));
        if cancelled {
            assert_eq!(counts.get("cancelled"), Some(&1));
            assert_eq!(counts.get("executed"), None);
            assert_eq!(counts.get("transfer"), None);
        } else {
            assert_eq!(counts.get("executed"), Some(&1));
            assert_eq!(counts.get("transfer"), Some(&1));
            assert_eq!(counts.get("cancelled"), None);
        }
    }

    #[tokio::test]
    async fn test_event_stream_adapter() {
        let node = TestNode::new();
        let stream = node
            .bus
            .event_stream(EventFilter::topics(vec![EventTopic::Scheduling]));

        node.service.request_issue(owner(), U256::one()).unwrap();
        node.service.request_redeem(owner(), U256::one()).unwrap();

        let events: Vec<_> = timeout(Duration::from_secs(1), stream.take(2).collect())
            .await
            .expect("two events within timeout");
        assert_eq!(events.len(), 2);
        assert!(events
            .iter()
            .all(|e| matches!(e, TimelockEvent::CallScheduled(_))));
    }
}
