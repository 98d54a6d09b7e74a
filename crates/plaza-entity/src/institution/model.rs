//! Institution entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An institution owned by exactly one user.
///
/// Institutions are destroyed transitively when their owner is
/// destroyed, taking their publications and comments with them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Institution {
    /// Unique institution identifier.
    pub id: Uuid,
    /// The owning user's ID.
    pub owner_id: Uuid,
    /// Institution name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Contact address.
    pub address: Option<String>,
    /// When the institution was created.
    pub created_at: DateTime<Utc>,
    /// When the institution was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInstitution {
    /// The owning user's ID.
    pub owner_id: Uuid,
    /// Institution name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Contact address.
    pub address: Option<String>,
}
