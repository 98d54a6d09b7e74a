//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Platform administrator.
    Admin,
    /// Regular client account.
    Client,
}

impl UserRole {
    /// Check if this role is an administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Client => "CLIENT",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = plaza_core::AppError;

    /// Parse a role name case-insensitively, normalizing to upper case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "CLIENT" => Ok(Self::Client),
            _ => Err(plaza_core::AppError::validation(format!(
                "Invalid role: '{s}'. Only ADMIN or CLIENT is allowed"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("Client".parse::<UserRole>().unwrap(), UserRole::Client);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("moderator".parse::<UserRole>().is_err());
        assert!("".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(UserRole::Admin.to_string(), "ADMIN");
        assert_eq!(UserRole::Client.to_string(), "CLIENT");
    }
}
