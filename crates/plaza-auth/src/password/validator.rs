//! Password policy enforcement for new passwords.

use plaza_core::config::auth::AuthConfig;
use plaza_core::error::AppError;

/// Validates new passwords against the configured length policy.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
    /// Maximum password length.
    max_length: usize,
}

impl PasswordPolicy {
    /// Creates a new policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            max_length: config.password_max_length,
        }
    }

    /// Validates a password against the policy.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or a validation error describing the violation.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let length = password.chars().count();
        if length < self.min_length || length > self.max_length {
            return Err(AppError::validation(format!(
                "Password must be between {} and {} characters",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PasswordPolicy {
        PasswordPolicy {
            min_length: 8,
            max_length: 100,
        }
    }

    #[test]
    fn test_rejects_too_short() {
        assert!(policy().validate("seven77").is_err());
    }

    #[test]
    fn test_accepts_boundaries() {
        assert!(policy().validate("eight888").is_ok());
        assert!(policy().validate(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn test_rejects_too_long() {
        assert!(policy().validate(&"x".repeat(101)).is_err());
    }
}
