//! Comment repository implementation.

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use plaza_core::error::{AppError, ErrorKind};
use plaza_core::result::AppResult;
use plaza_core::types::pagination::{PageRequest, PageResponse};
use plaza_entity::comment::{Comment, CreateComment};

/// Repository for comment CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a comment by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    /// List the comments of a publication with pagination.
    pub async fn find_by_publication(
        &self,
        publication_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Comment>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE publication_id = $1")
                .bind(publication_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count comments", e)
                })?;

        let comments = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE publication_id = $1 \
             ORDER BY created_at ASC LIMIT $2 OFFSET $3",
        )
        .bind(publication_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))?;

        Ok(PageResponse::new(
            comments,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new comment.
    pub async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (publication_id, author_id, text) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.publication_id)
        .bind(data.author_id)
        .bind(&data.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }

    /// Delete a single comment. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete comment", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every comment authored by a user. First step of the
    /// account cascade.
    pub async fn delete_by_author(
        executor: impl PgExecutor<'_>,
        author_id: Uuid,
    ) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE author_id = $1")
            .bind(author_id)
            .execute(executor)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete authored comments", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Delete every comment attached to a publication.
    pub async fn delete_by_publication(
        executor: impl PgExecutor<'_>,
        publication_id: Uuid,
    ) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE publication_id = $1")
            .bind(publication_id)
            .execute(executor)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to delete publication comments",
                    e,
                )
            })?;
        Ok(result.rows_affected())
    }
}
