//! User self-service operations — profile, password, image, and
//! account deletion for the authenticated account.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use plaza_auth::password::{PasswordHasher, PasswordPolicy};
use plaza_core::error::AppError;
use plaza_core::events::{AccountEvent, DomainEvent};
use plaza_core::traits::{ImageStore, Notifier};
use plaza_database::repositories::user::UserRepository;
use plaza_entity::user::User;
use plaza_storage::UploadedImage;

use crate::context::RequestContext;

use super::cascade::{self, CascadeSummary};
use super::image;
use super::policy::{AccountPolicy, ProfileUpdate, SELF_UPDATE};

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Connection pool for the deletion cascade transaction.
    pool: PgPool,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password length policy.
    password_policy: Arc<PasswordPolicy>,
    /// Profile image store.
    images: Arc<dyn ImageStore>,
    /// Realtime notifier.
    notifier: Arc<dyn Notifier>,
    /// Account authorization rules.
    policy: AccountPolicy,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        pool: PgPool,
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        password_policy: Arc<PasswordPolicy>,
        images: Arc<dyn ImageStore>,
        notifier: Arc<dyn Notifier>,
        policy: AccountPolicy,
    ) -> Self {
        Self {
            pool,
            user_repo,
            hasher,
            password_policy,
            images,
            notifier,
            policy,
        }
    }

    /// Gets the current user's record.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's profile fields.
    ///
    /// The payload is validated against the self-service allow-list
    /// before anything is applied; the refreshed record is broadcast
    /// and returned.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        update: ProfileUpdate,
    ) -> Result<User, AppError> {
        // Ensure the account still exists before validating the payload.
        self.get_profile(ctx).await?;

        let changes = SELF_UPDATE.validate(&update)?;
        let updated = self.user_repo.update_profile(ctx.user_id, &changes).await?;

        self.notifier
            .broadcast(DomainEvent::account(AccountEvent::Updated {
                user_id: updated.id,
                username: updated.username.clone(),
            }))
            .await;

        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(updated)
    }

    /// Changes the current user's password. No event is broadcast for
    /// password changes.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(AppError::validation(
                "The current or the new password is missing",
            ));
        }

        let user = self.get_profile(ctx).await?;

        let valid = self
            .hasher
            .verify_password(current_password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Incorrect password"));
        }

        self.password_policy.validate(new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.user_repo
            .update_password(ctx.user_id, &new_hash)
            .await?;

        info!(user_id = %ctx.user_id, "Password changed");
        Ok(())
    }

    /// Deletes the current user's account and everything it owns.
    ///
    /// Authorization is evaluated in order: the account must exist, must
    /// not be the reserved default administrator, must not be an
    /// administrator at all on this path, and the supplied password must
    /// verify. Returns the deleted record together with the cascade
    /// summary.
    pub async fn delete_account(
        &self,
        ctx: &RequestContext,
        password: &str,
    ) -> Result<(User, CascadeSummary), AppError> {
        let user = self.get_profile(ctx).await?;

        self.policy.authorize_self_delete(&user)?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Incorrect password"));
        }

        let summary = cascade::delete_account_data(&self.pool, self.images.as_ref(), &user).await?;

        self.notifier
            .broadcast(DomainEvent::account(AccountEvent::Deleted {
                user_id: user.id,
            }))
            .await;

        info!(
            user_id = %user.id,
            username = %user.username,
            records_deleted = summary.total_record_deletions(),
            "Account deleted"
        );
        Ok((user, summary))
    }

    /// Replaces the current user's profile image with a validated
    /// upload.
    pub async fn replace_image(
        &self,
        ctx: &RequestContext,
        upload: UploadedImage,
    ) -> Result<User, AppError> {
        let user = self.get_profile(ctx).await?;
        image::replace_image(
            &self.user_repo,
            self.images.as_ref(),
            self.notifier.as_ref(),
            &user,
            upload,
        )
        .await
    }

    /// Removes the current user's profile image.
    pub async fn delete_image(&self, ctx: &RequestContext) -> Result<User, AppError> {
        let user = self.get_profile(ctx).await?;
        image::delete_image(
            &self.user_repo,
            self.images.as_ref(),
            self.notifier.as_ref(),
            &user,
        )
        .await
    }
}
