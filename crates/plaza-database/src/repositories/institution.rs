//! Institution repository implementation.

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use plaza_core::error::{AppError, ErrorKind};
use plaza_core::result::AppResult;
use plaza_core::types::pagination::{PageRequest, PageResponse};
use plaza_entity::institution::{CreateInstitution, Institution};

/// Repository for institution CRUD and query operations.
#[derive(Debug, Clone)]
pub struct InstitutionRepository {
    pool: PgPool,
}

impl InstitutionRepository {
    /// Create a new institution repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an institution by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Institution>> {
        sqlx::query_as::<_, Institution>("SELECT * FROM institutions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find institution", e)
            })
    }

    /// Find the institution owned by a user, if any.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Option<Institution>> {
        sqlx::query_as::<_, Institution>("SELECT * FROM institutions WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find institution by owner", e)
            })
    }

    /// List all institutions with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Institution>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM institutions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count institutions", e)
            })?;

        let institutions = sqlx::query_as::<_, Institution>(
            "SELECT * FROM institutions ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list institutions", e))?;

        Ok(PageResponse::new(
            institutions,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new institution. Runs on the caller's executor so the
    /// owner's linkage flag can be set in the same transaction.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        data: &CreateInstitution,
    ) -> AppResult<Institution> {
        sqlx::query_as::<_, Institution>(
            "INSERT INTO institutions (owner_id, name, description, address) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.address)
        .fetch_one(executor)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("institutions_owner_id_key") =>
            {
                AppError::conflict("User already owns an institution".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create institution", e),
        })
    }

    /// Collect the IDs of every institution owned by a user.
    ///
    /// Used by the account cascade to walk the ownership graph before
    /// deleting anything.
    pub async fn ids_owned_by(
        executor: impl PgExecutor<'_>,
        owner_id: Uuid,
    ) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM institutions WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_all(executor)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list owned institutions", e)
            })
    }

    /// Delete every institution owned by a user.
    pub async fn delete_by_owner(executor: impl PgExecutor<'_>, owner_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM institutions WHERE owner_id = $1")
            .bind(owner_id)
            .execute(executor)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete institutions", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Delete a single institution. Returns `true` if a row was removed.
    pub async fn delete(executor: impl PgExecutor<'_>, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM institutions WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete institution", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
