//! # Test Fixtures
//!
//! A controller over in-memory adapters with a clock the test drives.

use std::sync::Arc;

use shared_bus::{EventFilter, InMemoryEventBus, Subscription};
use shared_types::entities::{Address, U256};
use tl_02_timelock_ledger::{
    ExecutionPolicy, InMemoryLedger, ManualClock, SingleOwner, TimelockConfig,
    TimelockLedgerService,
};

/// Delay floor used by most scenarios.
pub const MIN_DELAY: u64 = 60;

/// Controller type used across the suite.
pub type TestService =
    TimelockLedgerService<InMemoryLedger, Arc<ManualClock>, SingleOwner, Arc<InMemoryEventBus>>;

/// Owner address.
pub fn owner() -> Address {
    Address::repeat(0xAA)
}

/// Some address without the owner role.
pub fn attacker() -> Address {
    Address::repeat(0xEE)
}

/// A controller plus handles to its clock and bus.
pub struct TestNode {
    /// Controller under test.
    pub service: Arc<TestService>,
    /// Drives readiness.
    pub clock: Arc<ManualClock>,
    /// Notification bus the controller publishes to.
    pub bus: Arc<InMemoryEventBus>,
}

impl TestNode {
    /// Owner-only controller with `MIN_DELAY` and an empty ledger.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a node.
    pub fn builder() -> TestNodeBuilder {
        TestNodeBuilder {
            min_delay: MIN_DELAY,
            policy: ExecutionPolicy::OwnerOnly,
            owner_balance: U256::zero(),
            start: 0,
        }
    }

    /// Subscribe to everything published from now on.
    pub fn subscribe(&self) -> Subscription {
        self.bus.subscribe(EventFilter::all())
    }
}

impl Default for TestNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`TestNode`].
pub struct TestNodeBuilder {
    min_delay: u64,
    policy: ExecutionPolicy,
    owner_balance: U256,
    start: u64,
}

impl TestNodeBuilder {
    /// Delay floor.
    pub fn min_delay(mut self, secs: u64) -> Self {
        self.min_delay = secs;
        self
    }

    /// Execution policy.
    pub fn policy(mut self, policy: ExecutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Pre-existing owner balance (also counted in supply).
    pub fn owner_balance(mut self, balance: U256) -> Self {
        self.owner_balance = balance;
        self
    }

    /// Initial clock reading.
    pub fn start_at(mut self, now: u64) -> Self {
        self.start = now;
        self
    }

    /// Build the node.
    ///
    /// # Panics
    ///
    /// On invalid configuration; fixtures are only used from tests.
    pub fn build(self) -> TestNode {
        let clock = Arc::new(ManualClock::new(self.start));
        let bus = Arc::new(InMemoryEventBus::new());
        let ledger = InMemoryLedger::new()
            .with_balance(owner(), self.owner_balance)
            .expect("seed balance fits");
        let config = TimelockConfig::new(owner())
            .with_min_delay(self.min_delay)
            .with_execution_policy(self.policy);

        let service = TimelockLedgerService::new(
            config,
            ledger,
            Arc::clone(&clock),
            SingleOwner::new(owner()),
            Arc::clone(&bus),
        )
        .expect("valid test configuration");

        TestNode {
            service: Arc::new(service),
            clock,
            bus,
        }
    }
}
