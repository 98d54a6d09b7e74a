//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A notification delivered to a recipient user.
///
/// Destroyed when either the recipient or the originating user is
/// destroyed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user's ID.
    pub user_id: Uuid,
    /// The originating user's ID, if the notification was caused by
    /// another account's action.
    pub from_user_id: Option<Uuid>,
    /// Human-readable notification text.
    pub message: String,
    /// Whether the recipient has read this notification.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// The recipient user's ID.
    pub user_id: Uuid,
    /// The originating user's ID, if any.
    pub from_user_id: Option<Uuid>,
    /// Human-readable notification text.
    pub message: String,
}
