//! # Timelock Events
//!
//! Defines all event types that flow through the shared bus.
//! These wrap the notification payloads in `shared-types/src/events.rs`.

use serde::{Deserialize, Serialize};
use shared_types::events::{CallExecuted, CallScheduled, Cancelled, MinDelayChange, Transfer};
use shared_types::entities::OperationId;

/// Subsystem id of the operation registry.
pub const REGISTRY_SUBSYSTEM: u8 = 1;

/// Subsystem id of the timelock ledger controller.
pub const LEDGER_SUBSYSTEM: u8 = 2;

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelockEvent {
    // =========================================================================
    // SUBSYSTEM 1: OPERATION REGISTRY
    // =========================================================================
    /// An operation was scheduled and is now pending.
    CallScheduled(CallScheduled),

    /// A pending operation was cancelled.
    Cancelled(Cancelled),

    // =========================================================================
    // SUBSYSTEM 2: TIMELOCK LEDGER
    // =========================================================================
    /// An operation was executed against the ledger.
    CallExecuted(CallExecuted),

    /// The delay policy changed (emitted at construction).
    MinDelayChange(MinDelayChange),

    /// A mint or burn moved balance.
    Transfer(Transfer),
}

impl TimelockEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::CallScheduled(_) | Self::Cancelled(_) => EventTopic::Scheduling,
            Self::CallExecuted(_) => EventTopic::Execution,
            Self::MinDelayChange(_) => EventTopic::Policy,
            Self::Transfer(_) => EventTopic::Ledger,
        }
    }

    /// Get the originating subsystem ID.
    #[must_use]
    pub fn source_subsystem(&self) -> u8 {
        match self {
            Self::CallScheduled(_) | Self::Cancelled(_) => REGISTRY_SUBSYSTEM,
            Self::CallExecuted(_) | Self::MinDelayChange(_) | Self::Transfer(_) => {
                LEDGER_SUBSYSTEM
            }
        }
    }

    /// The operation this event refers to, if any.
    #[must_use]
    pub fn operation_id(&self) -> Option<OperationId> {
        match self {
            Self::CallScheduled(e) => Some(e.id),
            Self::Cancelled(e) => Some(e.id),
            Self::CallExecuted(e) => Some(e.id),
            Self::MinDelayChange(_) | Self::Transfer(_) => None,
        }
    }
}

impl From<CallScheduled> for TimelockEvent {
    fn from(e: CallScheduled) -> Self {
        Self::CallScheduled(e)
    }
}

impl From<Cancelled> for TimelockEvent {
    fn from(e: Cancelled) -> Self {
        Self::Cancelled(e)
    }
}

impl From<CallExecuted> for TimelockEvent {
    fn from(e: CallExecuted) -> Self {
        Self::CallExecuted(e)
    }
}

impl From<MinDelayChange> for TimelockEvent {
    fn from(e: MinDelayChange) -> Self {
        Self::MinDelayChange(e)
    }
}

impl From<Transfer> for TimelockEvent {
    fn from(e: Transfer) -> Self {
        Self::Transfer(e)
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Schedule and cancel notifications.
    Scheduling,
    /// Execution notifications.
    Execution,
    /// Balance movements (mint/burn transfers).
    Ledger,
    /// Delay policy changes.
    Policy,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Source subsystems to include. Empty means all sources.
    pub source_subsystems: Vec<u8>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            source_subsystems: Vec::new(),
        }
    }

    /// Create a filter for events from specific subsystems.
    #[must_use]
    pub fn from_subsystems(subsystems: Vec<u8>) -> Self {
        Self {
            topics: Vec::new(),
            source_subsystems: subsystems,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &TimelockEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let source_match = self.source_subsystems.is_empty()
            || self.source_subsystems.contains(&event.source_subsystem());

        topic_match && source_match
    }
}
