//! # Domain Layer (Inner Hexagon)
//!
//! Controller state, effect computation and errors. No locking, no I/O:
//! time and the owner are passed in.

pub mod effect;
pub mod errors;
pub mod state;

pub use effect::*;
pub use errors::*;
pub use state::*;
