//! Domain events emitted by Plaza operations.
//!
//! Events are pushed into the realtime hub and fanned out to every
//! connected WebSocket subscriber. Emission is fire-and-forget: a
//! delivery failure never fails the operation that produced the event.

pub mod account;
pub mod notification;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use account::AccountEvent;
pub use notification::NotificationEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// An account-lifecycle event.
    Account(AccountEvent),
    /// A notification event.
    Notification(NotificationEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Wrap an account event.
    pub fn account(event: AccountEvent) -> Self {
        Self::new(EventPayload::Account(event))
    }

    /// Wrap a notification event.
    pub fn notification(event: NotificationEvent) -> Self {
        Self::new(EventPayload::Notification(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_tags() {
        let event = DomainEvent::account(AccountEvent::Deleted {
            user_id: Uuid::new_v4(),
        });
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["payload"]["domain"], "Account");
        assert_eq!(json["payload"]["event"]["type"], "deleted");
    }
}
