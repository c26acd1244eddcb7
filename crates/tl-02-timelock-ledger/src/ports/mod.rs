//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Ports (Inbound)**: `TimelockLedgerApi`
//! - **Driven Ports (Outbound)**: `SupplyLedger`, `OwnerAuthority`, `Clock`
//!   (plus `shared_bus::EventPublisher`)

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
