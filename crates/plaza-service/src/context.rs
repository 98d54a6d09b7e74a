//! Request context carrying the authenticated actor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use plaza_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the access token by the API layer and passed into
/// service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The username from the token claims.
    pub username: String,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, username: String, role: UserRole) -> Self {
        Self {
            user_id,
            username,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
