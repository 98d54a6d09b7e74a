//! Broadcast hub for domain events.

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

use plaza_core::events::DomainEvent;
use plaza_core::traits::Notifier;

/// In-process pub/sub hub for domain events.
///
/// Every WebSocket connection holds a subscription; services hold the
/// hub behind the [`Notifier`] trait. Sending never blocks and never
/// fails the caller: with no subscribers the event is simply dropped.
#[derive(Debug)]
pub struct EventHub {
    /// Broadcast sender; receivers are created on subscribe.
    sender: broadcast::Sender<DomainEvent>,
}

impl EventHub {
    /// Create a new hub with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl Notifier for EventHub {
    async fn broadcast(&self, event: DomainEvent) {
        // send() errors only when there are no receivers, which is fine.
        if self.sender.send(event).is_err() {
            debug!("Broadcast dropped: no realtime subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_core::events::AccountEvent;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_broadcast_reaches_subscriber() {
        let hub = EventHub::new(8);
        let mut rx = hub.subscribe();

        let user_id = Uuid::new_v4();
        hub.broadcast(DomainEvent::account(AccountEvent::Deleted { user_id }))
            .await;

        let event = rx.recv().await.expect("event delivered");
        match event.payload {
            plaza_core::events::EventPayload::Account(AccountEvent::Deleted { user_id: id }) => {
                assert_eq!(id, user_id);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_broadcast_without_subscribers_is_silent() {
        let hub = EventHub::new(8);
        hub.broadcast(DomainEvent::account(AccountEvent::Deleted {
            user_id: Uuid::new_v4(),
        }))
        .await;
        assert_eq!(hub.subscriber_count(), 0);
    }
}
