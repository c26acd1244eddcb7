//! # TL-01 Operation Registry
//!
//! Lifecycle store for timelocked supply operations.
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (DDD), pure domain leaf
//! **Dependencies:** `shared-types` only; no ledger, no clock, no I/O
//!
//! ## Purpose
//!
//! Track every scheduled operation from request to execution:
//! - Reject duplicate identifiers and delays below the floor
//! - Answer pending / ready / done queries against a caller-supplied time
//! - Provide the `mark_done` and `cancel` primitives the ledger controller
//!   sequences inside its exclusive section
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | One record per identifier | `domain/invariants.rs` - `invariant_unregistered()` |
//! | `delay >= min_delay` | `domain/invariants.rs` - `invariant_min_delay()` |
//! | Ready time never wraps | `domain/invariants.rs` - `compute_ready_at()` |
//! | Done is terminal | `domain/entities.rs` - `OperationStatus::can_transition_to()` |
//! | Only pending may be cancelled | `registry.rs` - `OperationRegistry::cancel()` |
//!
//! ## Module Structure
//!
//! ```text
//! tl-01-operation-registry/
//! ├── domain/          # Operation, OperationState, invariants, errors
//! └── registry.rs      # OperationRegistry keyed store
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod registry;

// Re-exports
pub use domain::{
    compute_ready_at, invariant_min_delay, invariant_unregistered, Operation, OperationState,
    OperationStatus, RegistryError, DONE_TIMESTAMP, UNSET_TIMESTAMP,
};
pub use registry::OperationRegistry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID for bus events.
pub const SUBSYSTEM_ID: u8 = 1;
