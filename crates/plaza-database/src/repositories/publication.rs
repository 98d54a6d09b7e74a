//! Publication repository implementation.

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use plaza_core::error::{AppError, ErrorKind};
use plaza_core::result::AppResult;
use plaza_core::types::pagination::{PageRequest, PageResponse};
use plaza_entity::publication::{CreatePublication, Publication};

/// Repository for publication CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PublicationRepository {
    pool: PgPool,
}

impl PublicationRepository {
    /// Create a new publication repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a publication by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Publication>> {
        sqlx::query_as::<_, Publication>("SELECT * FROM publications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find publication", e)
            })
    }

    /// List the publications of an institution with pagination.
    pub async fn find_by_institution(
        &self,
        institution_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Publication>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM publications WHERE institution_id = $1")
                .bind(institution_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count publications", e)
                })?;

        let publications = sqlx::query_as::<_, Publication>(
            "SELECT * FROM publications WHERE institution_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(institution_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list publications", e))?;

        Ok(PageResponse::new(
            publications,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new publication.
    pub async fn create(&self, data: &CreatePublication) -> AppResult<Publication> {
        sqlx::query_as::<_, Publication>(
            "INSERT INTO publications (institution_id, title, content) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.institution_id)
        .bind(&data.title)
        .bind(&data.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create publication", e))
    }

    /// Collect the IDs of every publication under an institution.
    ///
    /// Used by the cascades to delete each publication's comments before
    /// the publications themselves.
    pub async fn ids_in_institution(
        executor: impl PgExecutor<'_>,
        institution_id: Uuid,
    ) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM publications WHERE institution_id = $1")
            .bind(institution_id)
            .fetch_all(executor)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to list institution publications",
                    e,
                )
            })
    }

    /// Delete every publication under an institution.
    pub async fn delete_by_institution(
        executor: impl PgExecutor<'_>,
        institution_id: Uuid,
    ) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM publications WHERE institution_id = $1")
            .bind(institution_id)
            .execute(executor)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete publications", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Delete a single publication. Returns `true` if a row was removed.
    pub async fn delete(executor: impl PgExecutor<'_>, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM publications WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete publication", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
