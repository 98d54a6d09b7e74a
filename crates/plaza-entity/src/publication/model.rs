//! Publication entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A publication posted under an institution.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Publication {
    /// Unique publication identifier.
    pub id: Uuid,
    /// The owning institution's ID.
    pub institution_id: Uuid,
    /// Publication title.
    pub title: String,
    /// Publication body text.
    pub content: String,
    /// When the publication was created.
    pub created_at: DateTime<Utc>,
    /// When the publication was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePublication {
    /// The owning institution's ID.
    pub institution_id: Uuid,
    /// Publication title.
    pub title: String,
    /// Publication body text.
    pub content: String,
}
