//! Default administrator bootstrap.

use tracing::{error, info, warn};

use plaza_auth::password::PasswordHasher;
use plaza_core::config::bootstrap::BootstrapConfig;
use plaza_core::result::AppResult;
use plaza_database::repositories::user::UserRepository;
use plaza_entity::user::model::CreateUser;
use plaza_entity::user::UserRole;

/// Create the reserved default administrator account if no
/// administrator exists yet.
///
/// Skips with a log line when an administrator is already present or
/// the reserved username/email is taken; a bootstrap failure is logged
/// but never aborts startup.
pub async fn ensure_default_admin(
    user_repo: &UserRepository,
    hasher: &PasswordHasher,
    config: &BootstrapConfig,
) -> AppResult<()> {
    if user_repo.find_any_by_role(UserRole::Admin).await?.is_some() {
        info!("Default administrator already exists");
        return Ok(());
    }

    if user_repo
        .find_by_username(&config.username)
        .await?
        .is_some()
        || user_repo.find_by_email(&config.email).await?.is_some()
    {
        warn!(
            username = %config.username,
            "Cannot create the default administrator: username or email already in use"
        );
        return Ok(());
    }

    let password_hash = match hasher.hash_password(&config.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!(error = %e, "Failed to hash the default administrator password");
            return Ok(());
        }
    };

    let admin = user_repo
        .create(&CreateUser {
            name: config.name.clone(),
            surname: config.surname.clone(),
            username: config.username.clone(),
            email: config.email.clone(),
            password_hash,
            role: UserRole::Admin,
        })
        .await?;

    info!(
        user_id = %admin.id,
        username = %admin.username,
        "Default administrator created"
    );
    Ok(())
}
