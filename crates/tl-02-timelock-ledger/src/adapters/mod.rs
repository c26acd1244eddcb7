//! # Adapters Layer (Outer Hexagon)
//!
//! In-process implementations of the outbound ports.

pub mod authority;
pub mod clock;
pub mod ledger;

pub use authority::*;
pub use clock::*;
pub use ledger::*;
