//! Comment CRUD with notification fan-in to the institution owner.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use plaza_core::error::AppError;
use plaza_core::events::{DomainEvent, NotificationEvent};
use plaza_core::traits::Notifier;
use plaza_core::types::pagination::{PageRequest, PageResponse};
use plaza_database::repositories::comment::CommentRepository;
use plaza_database::repositories::institution::InstitutionRepository;
use plaza_database::repositories::notification::NotificationRepository;
use plaza_database::repositories::publication::PublicationRepository;
use plaza_entity::comment::{Comment, CreateComment};
use plaza_entity::notification::CreateNotification;

use crate::context::RequestContext;

/// Manages comments on publications.
#[derive(Debug, Clone)]
pub struct CommentService {
    /// Comment repository.
    comment_repo: Arc<CommentRepository>,
    /// Publication repository.
    publication_repo: Arc<PublicationRepository>,
    /// Institution repository.
    institution_repo: Arc<InstitutionRepository>,
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
    /// Realtime notifier.
    notifier: Arc<dyn Notifier>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(
        comment_repo: Arc<CommentRepository>,
        publication_repo: Arc<PublicationRepository>,
        institution_repo: Arc<InstitutionRepository>,
        notification_repo: Arc<NotificationRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            comment_repo,
            publication_repo,
            institution_repo,
            notification_repo,
            notifier,
        }
    }

    /// Creates a comment on a publication and notifies the institution
    /// owner, unless the owner is the commenter.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        publication_id: Uuid,
        text: String,
    ) -> Result<Comment, AppError> {
        let publication = self
            .publication_repo
            .find_by_id(publication_id)
            .await?
            .ok_or_else(|| AppError::not_found("Publication not found"))?;

        let comment = self
            .comment_repo
            .create(&CreateComment {
                publication_id,
                author_id: ctx.user_id,
                text,
            })
            .await?;

        if let Some(institution) = self
            .institution_repo
            .find_by_id(publication.institution_id)
            .await?
        {
            if institution.owner_id != ctx.user_id {
                let notification = self
                    .notification_repo
                    .create(&CreateNotification {
                        user_id: institution.owner_id,
                        from_user_id: Some(ctx.user_id),
                        message: format!(
                            "{} commented on your publication '{}'",
                            ctx.username, publication.title
                        ),
                    })
                    .await?;

                self.notifier
                    .broadcast(DomainEvent::notification(NotificationEvent::Created {
                        notification_id: notification.id,
                        recipient_id: notification.user_id,
                        from_user_id: notification.from_user_id,
                        message: notification.message.clone(),
                    }))
                    .await;
            }
        }

        info!(
            user_id = %ctx.user_id,
            publication_id = %publication_id,
            comment_id = %comment.id,
            "Comment created"
        );
        Ok(comment)
    }

    /// Lists the comments of a publication with pagination.
    pub async fn list_by_publication(
        &self,
        publication_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResponse<Comment>, AppError> {
        self.publication_repo
            .find_by_id(publication_id)
            .await?
            .ok_or_else(|| AppError::not_found("Publication not found"))?;

        self.comment_repo
            .find_by_publication(publication_id, &page)
            .await
    }

    /// Deletes a comment. Allowed for the author and for administrators.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment not found"))?;

        if comment.author_id != ctx.user_id && !ctx.is_admin() {
            return Err(AppError::forbidden(
                "Only the author can delete this comment",
            ));
        }

        if !self.comment_repo.delete(id).await? {
            return Err(AppError::not_found("Comment not found"));
        }

        info!(user_id = %ctx.user_id, comment_id = %id, "Comment deleted");
        Ok(())
    }
}
