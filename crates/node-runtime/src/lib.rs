//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! - `container/` - configuration and subsystem wiring
//! - `handlers/` - background tasks (event log, stats reporter)
//! - `runtime` - start/shutdown orchestration

#![warn(missing_docs)]

pub mod container;
pub mod handlers;
pub mod runtime;

pub use container::{NodeConfig, SubsystemContainer};
pub use runtime::NodeRuntime;
