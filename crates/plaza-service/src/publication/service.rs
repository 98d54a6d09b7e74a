//! Publication CRUD under the owner's institution.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use plaza_core::error::{AppError, ErrorKind};
use plaza_core::types::pagination::{PageRequest, PageResponse};
use plaza_database::repositories::comment::CommentRepository;
use plaza_database::repositories::institution::InstitutionRepository;
use plaza_database::repositories::publication::PublicationRepository;
use plaza_entity::publication::{CreatePublication, Publication};

use crate::context::RequestContext;

/// Manages publications.
#[derive(Debug, Clone)]
pub struct PublicationService {
    /// Connection pool for multi-row transactions.
    pool: PgPool,
    /// Publication repository.
    publication_repo: Arc<PublicationRepository>,
    /// Institution repository.
    institution_repo: Arc<InstitutionRepository>,
}

/// Data for creating a publication.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewPublication {
    /// Publication title.
    pub title: String,
    /// Publication body text.
    pub content: String,
}

impl PublicationService {
    /// Creates a new publication service.
    pub fn new(
        pool: PgPool,
        publication_repo: Arc<PublicationRepository>,
        institution_repo: Arc<InstitutionRepository>,
    ) -> Self {
        Self {
            pool,
            publication_repo,
            institution_repo,
        }
    }

    /// Creates a publication under the current user's institution.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: NewPublication,
    ) -> Result<Publication, AppError> {
        let institution = self
            .institution_repo
            .find_by_owner(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User does not own an institution"))?;

        let publication = self
            .publication_repo
            .create(&CreatePublication {
                institution_id: institution.id,
                title: data.title,
                content: data.content,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            publication_id = %publication.id,
            "Publication created"
        );
        Ok(publication)
    }

    /// Gets a publication by ID.
    pub async fn get(&self, id: Uuid) -> Result<Publication, AppError> {
        self.publication_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Publication not found"))
    }

    /// Lists the publications of an institution with pagination.
    pub async fn list_by_institution(
        &self,
        institution_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResponse<Publication>, AppError> {
        self.institution_repo
            .find_by_id(institution_id)
            .await?
            .ok_or_else(|| AppError::not_found("Institution not found"))?;

        self.publication_repo
            .find_by_institution(institution_id, &page)
            .await
    }

    /// Deletes a publication together with its comments.
    ///
    /// Allowed for the institution owner and for administrators.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let publication = self.get(id).await?;

        let institution = self
            .institution_repo
            .find_by_id(publication.institution_id)
            .await?
            .ok_or_else(|| AppError::not_found("Institution not found"))?;

        if institution.owner_id != ctx.user_id && !ctx.is_admin() {
            return Err(AppError::forbidden(
                "Only the institution owner can delete this publication",
            ));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        CommentRepository::delete_by_publication(&mut *tx, publication.id).await?;
        if !PublicationRepository::delete(&mut *tx, publication.id).await? {
            return Err(AppError::not_found("Publication not found"));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        info!(
            user_id = %ctx.user_id,
            publication_id = %publication.id,
            "Publication deleted"
        );
        Ok(())
    }
}
