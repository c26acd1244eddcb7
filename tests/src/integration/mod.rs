//! # Integration Tests
//!
//! Registry, controller and bus exercised together through the public API.

pub mod bus;
pub mod flows;
pub mod snapshot;
