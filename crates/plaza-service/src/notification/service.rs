//! Notification listing and read tracking for the recipient.

use std::sync::Arc;

use uuid::Uuid;

use plaza_core::error::AppError;
use plaza_core::types::pagination::{PageRequest, PageResponse};
use plaza_database::repositories::notification::NotificationRepository;
use plaza_entity::notification::Notification;

use crate::context::RequestContext;

/// Manages a recipient's notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Lists the current user's notifications.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notification_repo
            .find_by_recipient(ctx.user_id, &page)
            .await
    }

    /// Counts the current user's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notification_repo.count_unread(ctx.user_id).await
    }

    /// Marks one of the current user's notifications as read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> Result<(), AppError> {
        let marked = self
            .notification_repo
            .mark_read(notification_id, ctx.user_id)
            .await?;
        if !marked {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }
}
