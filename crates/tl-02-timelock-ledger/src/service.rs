//! # Timelock Ledger Service
//!
//! Wires the controller state to its ports and serializes every call.
//!
//! ## Concurrency
//!
//! Registry, ledger and nonce live behind one `parking_lot::Mutex`. Each
//! entry point takes the lock once, reads the clock under it, and publishes
//! its notifications before releasing it, so:
//!
//! - two executions of the same id cannot both pass the readiness check
//! - cancel racing execute has exactly one winner
//! - subscribers see notifications in commit order
//!
//! Stats are a separate lock, only ever taken after (never before) the
//! state lock.

use crate::adapters::{InMemoryLedger, SingleOwner, SystemClock};
use crate::config::{ConfigError, ExecutionPolicy, TimelockConfig};
use crate::domain::{TimelockLedgerError, TimelockSnapshot, TimelockState};
use crate::metrics;
use crate::ports::inbound::TimelockLedgerApi;
use crate::ports::outbound::{Clock, OwnerAuthority, SupplyLedger};

use parking_lot::Mutex;
use serde::Serialize;
use shared_bus::{EventPublisher, InMemoryEventBus};
use shared_types::entities::{Address, OperationId, OperationKind, Timestamp, U256};
use shared_types::events::MinDelayChange;
use std::sync::Arc;
use tl_01_operation_registry::{Operation, OperationStatus};
use tracing::{debug, info, instrument, warn};

/// Service over in-memory adapters with wall-clock time.
pub type InMemoryTimelockService =
    TimelockLedgerService<InMemoryLedger, SystemClock, SingleOwner, Arc<InMemoryEventBus>>;

/// Statistics for the timelock ledger service.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStats {
    /// Operations scheduled.
    pub operations_scheduled: u64,
    /// Operations executed.
    pub operations_executed: u64,
    /// Pending operations cancelled.
    pub operations_cancelled: u64,
    /// Calls rejected by any precondition.
    pub rejected_requests: u64,
}

/// The timelock ledger controller.
pub struct TimelockLedgerService<L, C, A, P> {
    /// Service configuration.
    config: TimelockConfig,
    /// Registry + ledger + nonce.
    state: Mutex<TimelockState<L>>,
    /// Time source.
    clock: C,
    /// Owner capability.
    authority: A,
    /// Notification sink.
    events: P,
    /// Service statistics.
    stats: Mutex<ServiceStats>,
}

impl<L, C, A, P> TimelockLedgerService<L, C, A, P>
where
    L: SupplyLedger,
    C: Clock,
    A: OwnerAuthority,
    P: EventPublisher,
{
    /// Create a controller with an empty registry.
    ///
    /// Publishes `MinDelayChange { old_duration: 0, new_duration: min_delay }`.
    pub fn new(
        config: TimelockConfig,
        ledger: L,
        clock: C,
        authority: A,
        events: P,
    ) -> Result<Self, TimelockLedgerError> {
        let state = TimelockState::new(config.min_delay_secs, ledger);
        let service = Self::assemble(config, state, clock, authority, events)?;

        let min_delay = service.config.min_delay_secs;
        service.events.publish(
            MinDelayChange {
                old_duration: 0,
                new_duration: min_delay,
            }
            .into(),
        );

        info!(
            min_delay,
            owner = %service.config.owner,
            execution_policy = %service.config.execution_policy,
            "Timelock ledger controller started"
        );
        Ok(service)
    }

    /// Rebuild a controller from a snapshot.
    ///
    /// The snapshot must have been taken under the same delay floor. No
    /// `MinDelayChange` is published.
    pub fn restore(
        config: TimelockConfig,
        snapshot: TimelockSnapshot,
        ledger: L,
        clock: C,
        authority: A,
        events: P,
    ) -> Result<Self, TimelockLedgerError> {
        if snapshot.min_delay != config.min_delay_secs {
            return Err(ConfigError::MinDelayMismatch {
                configured: config.min_delay_secs,
                snapshot: snapshot.min_delay,
            }
            .into());
        }

        let state = TimelockState::restore(snapshot, ledger)?;
        let pending = state.registry().pending_ids().len();
        let nonce = state.nonce();
        let service = Self::assemble(config, state, clock, authority, events)?;

        metrics::record_restored(pending);
        info!(nonce, pending, "Timelock ledger controller restored");
        Ok(service)
    }

    fn assemble(
        config: TimelockConfig,
        state: TimelockState<L>,
        clock: C,
        authority: A,
        events: P,
    ) -> Result<Self, TimelockLedgerError> {
        config.validate()?;
        if authority.owner() != config.owner {
            return Err(ConfigError::OwnerMismatch {
                configured: config.owner,
                authority: authority.owner(),
            }
            .into());
        }

        Ok(Self {
            config,
            state: Mutex::new(state),
            clock,
            authority,
            events,
            stats: Mutex::new(ServiceStats::default()),
        })
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn authorize(&self, caller: Address, action: &'static str) -> Result<(), TimelockLedgerError> {
        if self.authority.is_owner(&caller) {
            Ok(())
        } else {
            Err(self.reject(TimelockLedgerError::Unauthorized { caller }, action))
        }
    }

    fn reject(&self, err: TimelockLedgerError, action: &'static str) -> TimelockLedgerError {
        self.stats.lock().rejected_requests += 1;
        metrics::record_rejected(err.kind());
        warn!(action, error = %err, "Call rejected");
        err
    }

    fn request(
        &self,
        caller: Address,
        kind: OperationKind,
        amount: U256,
    ) -> Result<OperationId, TimelockLedgerError> {
        self.authorize(caller, "request")?;

        let mut state = self.state.lock();
        let now = self.clock.now();
        let scheduled = state
            .schedule_next(kind, amount, now)
            .map_err(|e| self.reject(e, "request"))?;
        let (id, ready_at) = (scheduled.id, scheduled.ready_at);
        self.events.publish(scheduled.into());
        drop(state);

        self.stats.lock().operations_scheduled += 1;
        metrics::record_scheduled(kind);
        info!(%id, %kind, %amount, ready_at, "Operation scheduled");
        Ok(id)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Stored record for `id`, if any.
    pub fn get_operation(&self, id: OperationId) -> Option<Operation> {
        self.state.lock().registry().get(id).cloned()
    }

    /// Lifecycle status of `id` now.
    pub fn operation_status(&self, id: OperationId) -> OperationStatus {
        let state = self.state.lock();
        state.registry().status(id, self.clock.now())
    }

    /// Identifiers still pending, ascending.
    pub fn pending_operations(&self) -> Vec<OperationId> {
        self.state.lock().registry().pending_ids()
    }

    /// Identifier the next request will receive.
    pub fn next_nonce(&self) -> u64 {
        self.state.lock().nonce()
    }

    /// Holder of the owner role.
    pub fn owner(&self) -> Address {
        self.authority.owner()
    }

    /// Current total supply.
    pub fn total_supply(&self) -> U256 {
        self.state.lock().ledger().total_supply()
    }

    /// Balance of `account`.
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.state.lock().ledger().balance_of(account)
    }

    /// Current service statistics.
    pub fn stats(&self) -> ServiceStats {
        self.stats.lock().clone()
    }

    /// Export registry and nonce.
    pub fn snapshot(&self) -> TimelockSnapshot {
        self.state.lock().snapshot()
    }

    /// Active configuration.
    pub fn config(&self) -> &TimelockConfig {
        &self.config
    }
}

impl<L, C, A, P> TimelockLedgerApi for TimelockLedgerService<L, C, A, P>
where
    L: SupplyLedger,
    C: Clock,
    A: OwnerAuthority,
    P: EventPublisher,
{
    #[instrument(skip(self))]
    fn request_issue(
        &self,
        caller: Address,
        amount: U256,
    ) -> Result<OperationId, TimelockLedgerError> {
        self.request(caller, OperationKind::Issue, amount)
    }

    #[instrument(skip(self))]
    fn request_redeem(
        &self,
        caller: Address,
        amount: U256,
    ) -> Result<OperationId, TimelockLedgerError> {
        self.request(caller, OperationKind::Redeem, amount)
    }

    #[instrument(skip(self))]
    fn cancel(&self, caller: Address, id: OperationId) -> Result<(), TimelockLedgerError> {
        self.authorize(caller, "cancel")?;

        let mut state = self.state.lock();
        let cancelled = state.cancel(id).map_err(|e| self.reject(e, "cancel"))?;
        self.events.publish(cancelled.into());
        drop(state);

        self.stats.lock().operations_cancelled += 1;
        metrics::record_cancelled();
        info!(%id, "Operation cancelled");
        Ok(())
    }

    #[instrument(skip(self))]
    fn execute_request(
        &self,
        caller: Address,
        id: OperationId,
    ) -> Result<(), TimelockLedgerError> {
        if self.config.execution_policy == ExecutionPolicy::OwnerOnly {
            self.authorize(caller, "execute")?;
        }

        let _timer = metrics::execution_timer();
        let owner = self.authority.owner();

        let mut state = self.state.lock();
        let now = self.clock.now();
        let (executed, transfer) = state
            .execute(id, owner, now)
            .map_err(|e| self.reject(e, "execute"))?;
        let (kind, amount) = (executed.kind, executed.amount);
        self.events.publish(executed.into());
        self.events.publish(transfer.into());
        drop(state);

        self.stats.lock().operations_executed += 1;
        metrics::record_executed(kind);
        info!(%id, %kind, %amount, now, "Operation executed");
        Ok(())
    }

    fn is_operation(&self, id: OperationId) -> bool {
        self.state.lock().registry().is_registered(id)
    }

    fn is_operation_pending(&self, id: OperationId) -> bool {
        self.state.lock().registry().is_pending(id)
    }

    fn is_operation_ready(&self, id: OperationId) -> bool {
        let state = self.state.lock();
        state.registry().is_ready(id, self.clock.now())
    }

    fn is_operation_done(&self, id: OperationId) -> bool {
        self.state.lock().registry().is_done(id)
    }

    fn get_timestamp(&self, id: OperationId) -> Timestamp {
        let timestamp = self.state.lock().registry().timestamp(id);
        debug!(%id, timestamp, "Timestamp query");
        timestamp
    }

    fn get_min_delay(&self) -> u64 {
        self.config.min_delay_secs
    }
}

// =============================================================================
// TESTS
// =============================================================================
