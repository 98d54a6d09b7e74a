//! Account-lifecycle domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to account operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountEvent {
    /// An account's profile fields were updated.
    Updated {
        /// The account ID.
        user_id: Uuid,
        /// The username after the update.
        username: String,
    },
    /// An account's role was changed.
    RoleChanged {
        /// The account ID.
        user_id: Uuid,
        /// The previous role.
        old_role: String,
        /// The new role.
        new_role: String,
    },
    /// An account was deleted, together with everything it owned.
    Deleted {
        /// The deleted account's ID.
        user_id: Uuid,
    },
    /// An account's profile image was replaced or removed.
    ImageUpdated {
        /// The account ID.
        user_id: Uuid,
        /// The stored image filename, or `None` after removal.
        image_file: Option<String>,
    },
}
