//! Notification repository implementation.

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use plaza_core::error::{AppError, ErrorKind};
use plaza_core::result::AppResult;
use plaza_core::types::pagination::{PageRequest, PageResponse};
use plaza_entity::notification::{CreateNotification, Notification};

/// Repository for notification CRUD operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List notifications for a recipient.
    pub async fn find_by_recipient(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count notifications", e)
            })?;

        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })?;

        Ok(PageResponse::new(
            notifications,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count unread notifications for a recipient.
    pub async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Create a notification.
    pub async fn create(&self, data: &CreateNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, from_user_id, message) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.from_user_id)
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// Mark a notification as read. Returns `true` if the notification
    /// exists and belongs to the recipient.
    pub async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2")
                .bind(notification_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to mark read", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every notification where the user is the recipient or the
    /// originator. Part of the account cascade.
    pub async fn delete_by_participant(
        executor: impl PgExecutor<'_>,
        user_id: Uuid,
    ) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM notifications WHERE user_id = $1 OR from_user_id = $1")
                .bind(user_id)
                .execute(executor)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete notifications", e)
                })?;
        Ok(result.rows_affected())
    }
}
