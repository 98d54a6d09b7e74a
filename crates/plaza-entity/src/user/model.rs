//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered account on the platform.
///
/// The credential hash is never serialized, so returning a `User` from
/// a handler always yields the sanitized record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// First name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Unique login name, stored lowercase.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Stored profile image filename, if any.
    pub image_file: Option<String>,
    /// Whether this user currently owns an institution.
    pub has_institution: bool,
    /// The owned institution's ID, if any.
    pub institution_id: Option<Uuid>,
    /// Account role.
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has administrator privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Full display name, used in deletion confirmations.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Validated profile field changes ready to be applied.
///
/// Only fields that passed the per-privilege allow-list reach this
/// struct; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New first name.
    pub name: Option<String>,
    /// New surname.
    pub surname: Option<String>,
    /// New username (lowercased before storage).
    pub username: Option<String>,
    /// New email address.
    pub email: Option<String>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// First name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Desired username (lowercased before storage).
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            surname: "Lopez".to_string(),
            username: "analopez".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            image_file: None,
            has_institution: false,
            institution_id: None,
            role: UserRole::Client,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_value(sample_user()).expect("serialize");
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "analopez");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_user().full_name(), "Ana Lopez");
    }
}
