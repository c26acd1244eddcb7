//! # Shared Bus - Event Bus for Timelock Notifications
//!
//! Carries every notification the timelock emits (schedule, execute, cancel,
//! delay policy, mint/burn transfers) to any number of subscribers.
//!
//! ```text
//! ┌──────────────────┐                    ┌──────────────┐
//! │ Timelock Ledger  │                    │  Subscriber  │
//! │                  │    publish()       │ (indexer,    │
//! │                  │ ──────┐            │  holder UI)  │
//! └──────────────────┘       │            └──────────────┘
//!                            ▼                    ↑
//!                      ┌──────────────┐          │
//!                      │  Event Bus   │          │
//!                      │              │ ─────────┘
//!                      └──────────────┘  subscribe()
//! ```
//!
//! ## Ordering
//!
//! `publish` is synchronous. The ledger controller publishes while holding its
//! exclusive section, so every subscriber sees events in commit order.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, TimelockEvent, LEDGER_SUBSYSTEM, REGISTRY_SUBSYSTEM};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, EventSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
