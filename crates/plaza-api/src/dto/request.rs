//! Request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// First name.
    #[validate(length(min = 1, max = 25, message = "Name must be at most 25 characters"))]
    pub name: String,
    /// Surname.
    #[validate(length(min = 1, max = 25, message = "Surname must be at most 25 characters"))]
    pub surname: String,
    /// Desired username.
    #[validate(length(min = 3, max = 15, message = "Username must be 3 to 15 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 8, max = 100, message = "Password must be 8 to 100 characters"))]
    pub password: String,
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Profile update payload. Disallowed fields are rejected by the
/// service-side allow-list, not silently dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New first name.
    #[validate(length(min = 1, max = 25, message = "Name must be at most 25 characters"))]
    pub name: Option<String>,
    /// New surname.
    #[validate(length(min = 1, max = 25, message = "Surname must be at most 25 characters"))]
    pub surname: Option<String>,
    /// New username.
    #[validate(length(min = 3, max = 15, message = "Username must be 3 to 15 characters"))]
    pub username: Option<String>,
    /// New email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// Attempted role change (always rejected here).
    pub role: Option<String>,
}

/// Password change payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// Current plaintext password.
    #[serde(default)]
    pub current_password: String,
    /// New plaintext password.
    #[serde(default)]
    pub new_password: String,
}

/// Account deletion payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccountRequest {
    /// The acting account's plaintext password.
    pub password: String,
}

/// Role change payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    /// Target role name, accepted case-insensitively.
    pub role: String,
}

/// Institution creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInstitutionRequest {
    /// Institution name.
    #[validate(length(min = 1, max = 50, message = "Name must be at most 50 characters"))]
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Contact address.
    pub address: Option<String>,
}

/// Publication creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePublicationRequest {
    /// Publication title.
    #[validate(length(min = 1, max = 100, message = "Title must be at most 100 characters"))]
    pub title: String,
    /// Publication body text.
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// Comment creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Comment text.
    #[validate(length(min = 1, max = 500, message = "Comment must be 1 to 500 characters"))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            name: "Ana".to_string(),
            surname: "Lopez".to_string(),
            username: "analopez".to_string(),
            email: "ana@example.com".to_string(),
            password: "longenough".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let long_username = RegisterRequest {
            username: "x".repeat(16),
            ..valid
        };
        assert!(long_username.validate().is_err());
    }
}
