//! # Shared Types Crate
//!
//! This crate contains the entities and notification payloads shared by every
//! crate in the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `OperationId`, `OperationKind`, `Address` and
//!   the amount type are defined once here.
//! - **Payloads, not transport**: notification structs live here; the bus that
//!   carries them lives in `shared-bus`.

pub mod entities;
pub mod errors;
pub mod events;

pub use entities::*;
pub use errors::*;
pub use events::*;
