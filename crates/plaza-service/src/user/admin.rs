//! Admin account management — listing, profile updates, role changes,
//! image changes, and admin-initiated account deletion.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use plaza_auth::password::PasswordHasher;
use plaza_core::error::AppError;
use plaza_core::events::{AccountEvent, DomainEvent};
use plaza_core::traits::{ImageStore, Notifier};
use plaza_core::types::pagination::{PageRequest, PageResponse};
use plaza_database::repositories::user::UserRepository;
use plaza_entity::user::{User, UserRole};
use plaza_storage::UploadedImage;

use crate::context::RequestContext;

use super::cascade::{self, CascadeSummary};
use super::image;
use super::policy::{ADMIN_UPDATE, AccountPolicy, ProfileUpdate};

/// Handles administrative account management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// Connection pool for the deletion cascade transaction.
    pool: PgPool,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Profile image store.
    images: Arc<dyn ImageStore>,
    /// Realtime notifier.
    notifier: Arc<dyn Notifier>,
    /// Account authorization rules.
    policy: AccountPolicy,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        pool: PgPool,
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        images: Arc<dyn ImageStore>,
        notifier: Arc<dyn Notifier>,
        policy: AccountPolicy,
    ) -> Self {
        Self {
            pool,
            user_repo,
            hasher,
            images,
            notifier,
            policy,
        }
    }

    /// Lists all accounts with pagination.
    pub async fn list_users(&self, page: PageRequest) -> Result<PageResponse<User>, AppError> {
        self.user_repo.find_all(&page).await
    }

    /// Gets a single account by ID.
    pub async fn get_user(&self, user_id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates another account's profile fields.
    ///
    /// Another administrator's record cannot be modified; the payload
    /// is validated against the admin allow-list before anything is
    /// applied.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, AppError> {
        let target = self.get_user(user_id).await?;
        self.policy.authorize_admin_update(ctx.user_id, &target)?;

        let changes = ADMIN_UPDATE.validate(&update)?;
        let updated = self.user_repo.update_profile(user_id, &changes).await?;

        self.notifier
            .broadcast(DomainEvent::account(AccountEvent::Updated {
                user_id: updated.id,
                username: updated.username.clone(),
            }))
            .await;

        info!(admin_id = %ctx.user_id, target_id = %user_id, "User updated by admin");
        Ok(updated)
    }

    /// Changes an account's role.
    ///
    /// The role value is accepted case-insensitively and normalized to
    /// upper case; the reserved default administrator is exempt.
    pub async fn change_role(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        role: &str,
    ) -> Result<User, AppError> {
        let new_role = UserRole::from_str(role)?;

        let target = self.get_user(user_id).await?;
        self.policy.authorize_role_change(&target)?;

        let old_role = target.role;
        let updated = self.user_repo.update_role(user_id, new_role).await?;

        self.notifier
            .broadcast(DomainEvent::account(AccountEvent::RoleChanged {
                user_id: updated.id,
                old_role: old_role.to_string(),
                new_role: new_role.to_string(),
            }))
            .await;

        info!(
            admin_id = %ctx.user_id,
            target_id = %user_id,
            old_role = %old_role,
            new_role = %new_role,
            "User role changed"
        );
        Ok(updated)
    }

    /// Deletes an account and everything it owns on behalf of an
    /// administrator.
    ///
    /// Authorization is evaluated in order: the target must exist, must
    /// not be the reserved default administrator, the actor must be an
    /// administrator (an administrator target only when deleting
    /// themself), and the actor's password must verify.
    pub async fn delete_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        password: &str,
    ) -> Result<(User, CascadeSummary), AppError> {
        let target = self.get_user(user_id).await?;

        let actor = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Acting account no longer exists"))?;

        self.policy.authorize_admin_delete(&actor, &target)?;

        let valid = self
            .hasher
            .verify_password(password, &actor.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized(
                "Your password is incorrect, cannot proceed",
            ));
        }

        let summary =
            cascade::delete_account_data(&self.pool, self.images.as_ref(), &target).await?;

        self.notifier
            .broadcast(DomainEvent::account(AccountEvent::Deleted {
                user_id: target.id,
            }))
            .await;

        info!(
            admin_id = %ctx.user_id,
            target_id = %target.id,
            username = %target.username,
            records_deleted = summary.total_record_deletions(),
            "Account deleted by admin"
        );
        Ok((target, summary))
    }

    /// Replaces another account's profile image.
    ///
    /// Allowed on any client account; an administrator's image may only
    /// be changed by themself.
    pub async fn replace_image(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        upload: UploadedImage,
    ) -> Result<User, AppError> {
        let target = self.get_user(user_id).await?;
        self.policy.authorize_image_change(ctx.user_id, &target)?;

        image::replace_image(
            &self.user_repo,
            self.images.as_ref(),
            self.notifier.as_ref(),
            &target,
            upload,
        )
        .await
    }

    /// Removes another account's profile image.
    pub async fn delete_image(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
    ) -> Result<User, AppError> {
        let target = self.get_user(user_id).await?;
        self.policy.authorize_image_change(ctx.user_id, &target)?;

        image::delete_image(
            &self.user_repo,
            self.images.as_ref(),
            self.notifier.as_ref(),
            &target,
        )
        .await
    }
}
