//! Broadcast notifier trait for realtime event fan-out.

use async_trait::async_trait;

use crate::events::DomainEvent;

/// Fire-and-forget broadcast channel for domain events.
///
/// Injected into the service layer at construction so that the
/// lifecycle components never depend on a concrete transport.
/// Implementations must swallow delivery failures; a broadcast
/// with no listeners is not an error.
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Broadcast an event to all current subscribers.
    async fn broadcast(&self, event: DomainEvent);
}
