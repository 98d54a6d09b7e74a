//! Ordered cascade deletion of everything an account owns.
//!
//! The deletion order follows the ownership graph and must not change:
//! authored comments, then per-institution publication comments and
//! publications, then institutions, then the profile image file, then
//! notifications, then the user record itself. Every row deletion runs
//! in one transaction; the image unlink sits outside it and is
//! downgraded to a warning on failure.

use sqlx::PgPool;
use tracing::warn;

use plaza_core::error::{AppError, ErrorKind};
use plaza_core::result::AppResult;
use plaza_core::traits::ImageStore;
use plaza_database::repositories::comment::CommentRepository;
use plaza_database::repositories::institution::InstitutionRepository;
use plaza_database::repositories::notification::NotificationRepository;
use plaza_database::repositories::publication::PublicationRepository;
use plaza_database::repositories::user::UserRepository;
use plaza_entity::user::User;

/// Per-collection outcome of an account cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    /// Comments removed (authored by the user plus comments under the
    /// user's publications).
    pub comments_deleted: u64,
    /// Publications removed.
    pub publications_deleted: u64,
    /// Institutions removed.
    pub institutions_deleted: u64,
    /// Notifications removed.
    pub notifications_deleted: u64,
    /// Whether the profile image file was removed from the store.
    pub image_removed: bool,
}

impl CascadeSummary {
    /// Total persistence-collection deletions, including the user
    /// record itself.
    pub fn total_record_deletions(&self) -> u64 {
        self.comments_deleted
            + self.publications_deleted
            + self.institutions_deleted
            + self.notifications_deleted
            + 1
    }
}

/// Delete all data owned by or referencing the user, then the user
/// record itself.
///
/// Zero-match steps are no-ops. Returns `NotFound` if the user record
/// has vanished by the time the final deletion runs; the transaction is
/// rolled back in that case.
pub(crate) async fn delete_account_data(
    pool: &PgPool,
    images: &dyn ImageStore,
    user: &User,
) -> AppResult<CascadeSummary> {
    let mut tx = pool.begin().await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to begin cascade transaction", e)
    })?;

    let mut summary = CascadeSummary::default();

    summary.comments_deleted += CommentRepository::delete_by_author(&mut *tx, user.id).await?;

    let institution_ids = InstitutionRepository::ids_owned_by(&mut *tx, user.id).await?;
    for institution_id in &institution_ids {
        let publication_ids =
            PublicationRepository::ids_in_institution(&mut *tx, *institution_id).await?;
        for publication_id in publication_ids {
            summary.comments_deleted +=
                CommentRepository::delete_by_publication(&mut *tx, publication_id).await?;
        }
        summary.publications_deleted +=
            PublicationRepository::delete_by_institution(&mut *tx, *institution_id).await?;
    }

    summary.institutions_deleted = InstitutionRepository::delete_by_owner(&mut *tx, user.id).await?;

    if let Some(image) = &user.image_file {
        match images.delete(image).await {
            Ok(()) => summary.image_removed = true,
            Err(e) => {
                warn!(
                    user_id = %user.id,
                    image = %image,
                    error = %e,
                    "Failed to remove profile image during account deletion"
                );
            }
        }
    }

    summary.notifications_deleted =
        NotificationRepository::delete_by_participant(&mut *tx, user.id).await?;

    if !UserRepository::delete(&mut *tx, user.id).await? {
        // Dropping the transaction rolls back the dependent deletions.
        return Err(AppError::not_found("User not found"));
    }

    tx.commit().await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            "Failed to commit cascade transaction",
            e,
        )
    })?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_record_deletions_counts_user_row() {
        let summary = CascadeSummary {
            comments_deleted: 3,
            publications_deleted: 2,
            institutions_deleted: 1,
            notifications_deleted: 4,
            image_removed: true,
        };
        assert_eq!(summary.total_record_deletions(), 11);
        assert_eq!(CascadeSummary::default().total_record_deletions(), 1);
    }
}
