//! # Background Handlers
//!
//! Long-running tasks spawned by the node runtime.

pub mod event_log;
pub mod stats_reporter;

pub use event_log::*;
pub use stats_reporter::*;
