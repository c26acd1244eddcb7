//! # Subsystem Container
//!
//! Central container holding the event bus and the timelock controller with
//! their adapters wired in.

pub mod config;
pub mod subsystems;

pub use config::NodeConfig;
pub use subsystems::SubsystemContainer;
