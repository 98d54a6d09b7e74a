//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A comment attached to a publication.
///
/// Destroyed when either its author or its parent publication is
/// destroyed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The commented publication's ID.
    pub publication_id: Uuid,
    /// The authoring user's ID.
    pub author_id: Uuid,
    /// Comment text.
    pub text: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// The commented publication's ID.
    pub publication_id: Uuid,
    /// The authoring user's ID.
    pub author_id: Uuid,
    /// Comment text.
    pub text: String,
}
