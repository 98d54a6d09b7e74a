//! Institution CRUD and its own deletion cascade.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use plaza_core::error::{AppError, ErrorKind};
use plaza_core::types::pagination::{PageRequest, PageResponse};
use plaza_database::repositories::comment::CommentRepository;
use plaza_database::repositories::institution::InstitutionRepository;
use plaza_database::repositories::publication::PublicationRepository;
use plaza_database::repositories::user::UserRepository;
use plaza_entity::institution::{CreateInstitution, Institution};

use crate::context::RequestContext;

/// Manages institutions and their ownership linkage.
#[derive(Debug, Clone)]
pub struct InstitutionService {
    /// Connection pool for multi-row transactions.
    pool: PgPool,
    /// Institution repository.
    institution_repo: Arc<InstitutionRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
}

/// Data for creating an institution.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewInstitution {
    /// Institution name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Contact address.
    pub address: Option<String>,
}

impl InstitutionService {
    /// Creates a new institution service.
    pub fn new(
        pool: PgPool,
        institution_repo: Arc<InstitutionRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            pool,
            institution_repo,
            user_repo,
        }
    }

    /// Creates an institution owned by the current user and links it on
    /// the owner's record. One institution per user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: NewInstitution,
    ) -> Result<Institution, AppError> {
        let owner = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if owner.has_institution {
            return Err(AppError::conflict("User already owns an institution"));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let institution = InstitutionRepository::create(
            &mut *tx,
            &CreateInstitution {
                owner_id: owner.id,
                name: data.name,
                description: data.description,
                address: data.address,
            },
        )
        .await?;

        UserRepository::set_institution(&mut *tx, owner.id, Some(institution.id)).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        info!(
            user_id = %owner.id,
            institution_id = %institution.id,
            "Institution created"
        );
        Ok(institution)
    }

    /// Gets an institution by ID.
    pub async fn get(&self, id: Uuid) -> Result<Institution, AppError> {
        self.institution_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Institution not found"))
    }

    /// Lists all institutions with pagination.
    pub async fn list(&self, page: PageRequest) -> Result<PageResponse<Institution>, AppError> {
        self.institution_repo.find_all(&page).await
    }

    /// Deletes an institution with its publications and their comments,
    /// and clears the owner's linkage.
    ///
    /// Allowed for the owner and for administrators.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let institution = self.get(id).await?;

        if institution.owner_id != ctx.user_id && !ctx.is_admin() {
            return Err(AppError::forbidden(
                "Only the owner can delete this institution",
            ));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let publication_ids =
            PublicationRepository::ids_in_institution(&mut *tx, institution.id).await?;
        for publication_id in publication_ids {
            CommentRepository::delete_by_publication(&mut *tx, publication_id).await?;
        }
        PublicationRepository::delete_by_institution(&mut *tx, institution.id).await?;

        if !InstitutionRepository::delete(&mut *tx, institution.id).await? {
            return Err(AppError::not_found("Institution not found"));
        }

        UserRepository::set_institution(&mut *tx, institution.owner_id, None).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        info!(
            user_id = %ctx.user_id,
            institution_id = %institution.id,
            "Institution deleted"
        );
        Ok(())
    }
}
