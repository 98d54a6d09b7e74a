//! Profile image lifecycle shared by the self-service and admin paths.
//!
//! Replace: the old file goes first (failure downgraded to a warning),
//! then the record points at the new file. Delete: the file must go
//! before the record is cleared, so state and disk never diverge.

use tracing::{info, warn};

use plaza_core::error::AppError;
use plaza_core::events::{AccountEvent, DomainEvent};
use plaza_core::result::AppResult;
use plaza_core::traits::{ImageStore, Notifier};
use plaza_database::repositories::user::UserRepository;
use plaza_entity::user::User;
use plaza_storage::UploadedImage;

/// Replace the target account's profile image with a validated upload.
pub(crate) async fn replace_image(
    users: &UserRepository,
    images: &dyn ImageStore,
    notifier: &dyn Notifier,
    target: &User,
    upload: UploadedImage,
) -> AppResult<User> {
    if let Some(old) = &target.image_file {
        if let Err(e) = images.delete(old).await {
            warn!(
                user_id = %target.id,
                image = %old,
                error = %e,
                "Failed to remove previous profile image"
            );
        }
    }

    let updated = users.set_image(target.id, Some(&upload.filename)).await?;

    notifier
        .broadcast(DomainEvent::account(AccountEvent::ImageUpdated {
            user_id: updated.id,
            image_file: updated.image_file.clone(),
        }))
        .await;

    info!(user_id = %updated.id, image = %upload.filename, "Profile image updated");
    Ok(updated)
}

/// Remove the target account's profile image.
///
/// A file-store failure here is fatal and leaves the record untouched.
pub(crate) async fn delete_image(
    users: &UserRepository,
    images: &dyn ImageStore,
    notifier: &dyn Notifier,
    target: &User,
) -> AppResult<User> {
    let Some(image) = &target.image_file else {
        return Err(AppError::validation("The user has no profile image"));
    };

    images
        .delete(image)
        .await
        .map_err(|e| AppError::internal(format!("Failed to delete the image file: {e}")))?;

    let updated = users.set_image(target.id, None).await?;

    notifier
        .broadcast(DomainEvent::account(AccountEvent::ImageUpdated {
            user_id: updated.id,
            image_file: None,
        }))
        .await;

    info!(user_id = %updated.id, "Profile image removed");
    Ok(updated)
}
