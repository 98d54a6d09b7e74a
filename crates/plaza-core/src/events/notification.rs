//! Notification domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to notification delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// A new notification was stored for a recipient.
    Created {
        /// The stored notification's ID.
        notification_id: Uuid,
        /// The recipient account.
        recipient_id: Uuid,
        /// The originating account, if any.
        from_user_id: Option<Uuid>,
        /// Human-readable notification text.
        message: String,
    },
}
