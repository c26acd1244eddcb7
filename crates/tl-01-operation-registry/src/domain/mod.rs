//! # Domain Module
//!
//! Core domain types for the Operation Registry.
//! Pure business logic: time is always passed in, never read.

pub mod entities;
pub mod errors;
pub mod invariants;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
