//! # TL-02 Timelock Ledger Controller
//!
//! **Subsystem ID:** 2
//! **Architecture:** Hexagonal (DDD)
//!
//! ## Purpose
//!
//! Gate privileged supply mutations behind a mandatory observation window:
//! - The owner requests an issue (mint) or redeem (burn) of its own balance
//! - The request becomes executable `min_delay` seconds later
//! - The owner may cancel while it is pending
//! - Execution applies the effect to the ledger exactly once
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Ids never reused | `domain/state.rs` - `TimelockState::schedule_next()` |
//! | Nonce advances only on success | `domain/state.rs` - `TimelockState::schedule_next()` |
//! | No partial application | `domain/state.rs` - `TimelockState::execute()` |
//! | Checked supply arithmetic | `domain/effect.rs` - `compute_effect()` |
//! | One call at a time | `service.rs` - single `Mutex<TimelockState>` |
//!
//! ## Outbound Dependencies
//!
//! | Port | Adapter | Purpose |
//! |------|---------|---------|
//! | `SupplyLedger` | `InMemoryLedger` | Total supply and balances |
//! | `OwnerAuthority` | `SingleOwner` | Owner capability check |
//! | `Clock` | `SystemClock`, `ManualClock` | Current time |
//! | `shared_bus::EventPublisher` | `InMemoryEventBus` | Notifications |
//!
//! ## Feature Flags
//!
//! - `metrics`: record Prometheus counters via `timelock-telemetry`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shared_bus::InMemoryEventBus;
//! use tl_02_timelock_ledger::*;
//!
//! let config = TimelockConfig::new(owner).with_min_delay(60);
//! let service = TimelockLedgerService::new(
//!     config,
//!     InMemoryLedger::new(),
//!     SystemClock,
//!     SingleOwner::new(owner),
//!     Arc::new(InMemoryEventBus::new()),
//! )?;
//!
//! let id = service.request_issue(owner, U256::from(100))?;
//! // ... at least 60 seconds later
//! service.execute_request(owner, id)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
mod metrics;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryLedger, ManualClock, SingleOwner, SystemClock};
pub use config::{ConfigError, ExecutionPolicy, TimelockConfig, DEFAULT_MIN_DELAY_SECS};
pub use domain::{
    compute_effect, ErrorKind, SupplyEffect, TimelockLedgerError, TimelockSnapshot,
    TimelockState,
};
pub use ports::{Clock, OwnerAuthority, SupplyLedger, TimelockLedgerApi};
pub use service::{InMemoryTimelockService, ServiceStats, TimelockLedgerService};
pub use shared_types::entities::{Address, OperationId, OperationKind, Timestamp, U256};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID for bus events.
pub const SUBSYSTEM_ID: u8 = shared_bus::LEDGER_SUBSYSTEM;
