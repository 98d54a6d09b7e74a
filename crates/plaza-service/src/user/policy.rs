//! Authorization rules and the per-privilege update allow-list for
//! account operations.
//!
//! Every rule here is a pure function over already-loaded records, so
//! the full authorization matrix is unit-tested without a database.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use plaza_core::error::AppError;
use plaza_core::result::AppResult;
use plaza_entity::user::model::UpdateProfile;
use plaza_entity::user::User;

/// Account authorization rules, parameterized by the reserved
/// default-administrator username.
#[derive(Debug, Clone)]
pub struct AccountPolicy {
    /// Username of the account exempt from deletion and role changes.
    reserved_username: String,
}

impl AccountPolicy {
    /// Creates a policy with the given reserved username.
    pub fn new(reserved_username: impl Into<String>) -> Self {
        Self {
            reserved_username: reserved_username.into(),
        }
    }

    /// Whether the account is the reserved default administrator.
    pub fn is_reserved(&self, user: &User) -> bool {
        user.username.eq_ignore_ascii_case(&self.reserved_username)
    }

    /// Self-service deletion checks, evaluated after the target lookup
    /// and before password verification.
    pub fn authorize_self_delete(&self, target: &User) -> AppResult<()> {
        if self.is_reserved(target) {
            return Err(AppError::forbidden(
                "The default administrator cannot be deleted",
            ));
        }
        if target.role.is_admin() {
            return Err(AppError::forbidden(
                "Administrators cannot delete their own account through this endpoint",
            ));
        }
        Ok(())
    }

    /// Admin-initiated deletion checks, evaluated after the target
    /// lookup and before password verification.
    ///
    /// An administrator target may only be deleted when the actor is
    /// deleting themself.
    pub fn authorize_admin_delete(&self, actor: &User, target: &User) -> AppResult<()> {
        if self.is_reserved(target) {
            return Err(AppError::forbidden(
                "The default administrator cannot be deleted",
            ));
        }
        if !actor.role.is_admin() {
            return Err(AppError::forbidden(
                "Only administrators can perform this action",
            ));
        }
        if target.role.is_admin() && actor.id != target.id {
            return Err(AppError::forbidden(
                "An administrator can only be deleted by themself",
            ));
        }
        Ok(())
    }

    /// An admin updating another account may not touch another
    /// administrator's record.
    pub fn authorize_admin_update(&self, actor_id: Uuid, target: &User) -> AppResult<()> {
        if target.role.is_admin() && actor_id != target.id {
            return Err(AppError::forbidden(
                "Another administrator's record cannot be modified",
            ));
        }
        Ok(())
    }

    /// The reserved account is exempt from role changes.
    pub fn authorize_role_change(&self, target: &User) -> AppResult<()> {
        if self.is_reserved(target) {
            return Err(AppError::forbidden(
                "The default administrator's role cannot be changed",
            ));
        }
        Ok(())
    }

    /// An account may always change its own image; another account's
    /// image only when that account is not an administrator.
    pub fn authorize_image_change(&self, actor_id: Uuid, target: &User) -> AppResult<()> {
        if actor_id == target.id {
            return Ok(());
        }
        if target.role.is_admin() {
            return Err(AppError::forbidden(
                "Another administrator's profile image can only be changed by themself",
            ));
        }
        Ok(())
    }
}

/// Raw profile update payload as received from a request.
///
/// Carries every field a client could try to send; the allow-list
/// decides which of them are legal for the acting privilege level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New first name.
    pub name: Option<String>,
    /// New surname.
    pub surname: Option<String>,
    /// New username.
    pub username: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// Attempted role change. Never allowed here; roles change only
    /// through the dedicated role endpoint.
    pub role: Option<String>,
}

/// A profile field a payload can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    /// First name.
    Name,
    /// Surname.
    Surname,
    /// Username.
    Username,
    /// Email address.
    Email,
    /// Account role.
    Role,
}

impl UpdateField {
    /// Field name as it appears in payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Username => "username",
            Self::Email => "email",
            Self::Role => "role",
        }
    }
}

impl ProfileUpdate {
    /// The fields present in this payload.
    pub fn present_fields(&self) -> Vec<UpdateField> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push(UpdateField::Name);
        }
        if self.surname.is_some() {
            fields.push(UpdateField::Surname);
        }
        if self.username.is_some() {
            fields.push(UpdateField::Username);
        }
        if self.email.is_some() {
            fields.push(UpdateField::Email);
        }
        if self.role.is_some() {
            fields.push(UpdateField::Role);
        }
        fields
    }
}

/// Explicit allow-list of updatable profile fields for one privilege
/// level.
#[derive(Debug, Clone, Copy)]
pub struct UpdatePolicy {
    /// Fields a payload may carry under this policy.
    allowed: &'static [UpdateField],
}

/// Fields an account may change on itself.
pub const SELF_UPDATE: UpdatePolicy = UpdatePolicy {
    allowed: &[
        UpdateField::Name,
        UpdateField::Surname,
        UpdateField::Username,
        UpdateField::Email,
    ],
};

/// Fields an administrator may change on another account.
pub const ADMIN_UPDATE: UpdatePolicy = UpdatePolicy {
    allowed: &[
        UpdateField::Name,
        UpdateField::Surname,
        UpdateField::Username,
        UpdateField::Email,
    ],
};

impl UpdatePolicy {
    /// Validate a payload against this allow-list and convert it into
    /// applicable changes.
    ///
    /// Rejects empty payloads and payloads carrying any disallowed
    /// field, without partially applying anything.
    pub fn validate(&self, update: &ProfileUpdate) -> AppResult<UpdateProfile> {
        let fields = update.present_fields();
        if fields.is_empty() {
            return Err(AppError::validation(
                "Invalid or missing data for the update",
            ));
        }
        if let Some(field) = fields.iter().copied().find(|f| !self.allowed.contains(f)) {
            return Err(AppError::validation(format!(
                "Field '{}' cannot be updated",
                field.as_str()
            )));
        }
        Ok(UpdateProfile {
            name: update.name.clone(),
            surname: update.surname.clone(),
            username: update.username.as_ref().map(|u| u.to_lowercase()),
            email: update.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use plaza_entity::user::UserRole;

    fn user(username: &str, role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            surname: "User".to_string(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$hash".to_string(),
            image_file: None,
            has_institution: false,
            institution_id: None,
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn policy() -> AccountPolicy {
        AccountPolicy::new("admin")
    }

    #[test]
    fn test_self_delete_allows_client() {
        let target = user("ana", UserRole::Client);
        assert!(policy().authorize_self_delete(&target).is_ok());
    }

    #[test]
    fn test_self_delete_rejects_admin() {
        let target = user("boss", UserRole::Admin);
        assert!(policy().authorize_self_delete(&target).is_err());
    }

    #[test]
    fn test_self_delete_rejects_reserved_account() {
        let target = user("admin", UserRole::Admin);
        let err = policy().authorize_self_delete(&target).unwrap_err();
        assert!(err.message.contains("default administrator"));
    }

    #[test]
    fn test_reserved_check_is_case_insensitive() {
        let target = user("Admin", UserRole::Admin);
        assert!(policy().authorize_self_delete(&target).is_err());
    }

    #[test]
    fn test_admin_delete_requires_admin_actor() {
        let actor = user("ana", UserRole::Client);
        let target = user("bob", UserRole::Client);
        assert!(policy().authorize_admin_delete(&actor, &target).is_err());
    }

    #[test]
    fn test_admin_delete_allows_client_target() {
        let actor = user("boss", UserRole::Admin);
        let target = user("bob", UserRole::Client);
        assert!(policy().authorize_admin_delete(&actor, &target).is_ok());
    }

    #[test]
    fn test_admin_cannot_delete_other_admin() {
        let actor = user("boss", UserRole::Admin);
        let target = user("other", UserRole::Admin);
        assert!(policy().authorize_admin_delete(&actor, &target).is_err());
    }

    #[test]
    fn test_admin_may_delete_themself() {
        let actor = user("boss", UserRole::Admin);
        assert!(policy().authorize_admin_delete(&actor, &actor).is_ok());
    }

    #[test]
    fn test_admin_delete_never_touches_reserved_account() {
        let actor = user("boss", UserRole::Admin);
        let target = user("admin", UserRole::Admin);
        assert!(policy().authorize_admin_delete(&actor, &target).is_err());
    }

    #[test]
    fn test_admin_update_rejects_other_admin_record() {
        let actor_id = Uuid::new_v4();
        let target = user("other", UserRole::Admin);
        assert!(policy().authorize_admin_update(actor_id, &target).is_err());
        assert!(policy().authorize_admin_update(target.id, &target).is_ok());
    }

    #[test]
    fn test_role_change_exempts_reserved_account() {
        let target = user("admin", UserRole::Admin);
        assert!(policy().authorize_role_change(&target).is_err());
        let other = user("bob", UserRole::Client);
        assert!(policy().authorize_role_change(&other).is_ok());
    }

    #[test]
    fn test_image_change_own_account_always_allowed() {
        let target = user("boss", UserRole::Admin);
        assert!(policy().authorize_image_change(target.id, &target).is_ok());
    }

    #[test]
    fn test_image_change_other_admin_rejected() {
        let actor_id = Uuid::new_v4();
        let admin = user("boss", UserRole::Admin);
        let client = user("bob", UserRole::Client);
        assert!(policy().authorize_image_change(actor_id, &admin).is_err());
        assert!(policy().authorize_image_change(actor_id, &client).is_ok());
    }

    #[test]
    fn test_update_policy_rejects_empty_payload() {
        let update = ProfileUpdate::default();
        assert!(SELF_UPDATE.validate(&update).is_err());
    }

    #[test]
    fn test_update_policy_rejects_role_field() {
        let update = ProfileUpdate {
            role: Some("ADMIN".to_string()),
            ..Default::default()
        };
        assert!(SELF_UPDATE.validate(&update).is_err());
        assert!(ADMIN_UPDATE.validate(&update).is_err());
    }

    #[test]
    fn test_update_policy_rejects_mixed_payload() {
        let update = ProfileUpdate {
            name: Some("Ana".to_string()),
            role: Some("ADMIN".to_string()),
            ..Default::default()
        };
        assert!(SELF_UPDATE.validate(&update).is_err());
    }

    #[test]
    fn test_update_policy_accepts_profile_fields() {
        let update = ProfileUpdate {
            name: Some("Ana".to_string()),
            username: Some("AnaLopez".to_string()),
            ..Default::default()
        };
        let changes = SELF_UPDATE.validate(&update).unwrap();
        assert_eq!(changes.name.as_deref(), Some("Ana"));
        assert_eq!(changes.username.as_deref(), Some("analopez"));
        assert!(changes.email.is_none());
    }
}
