//! Comment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use plaza_core::error::AppError;
use plaza_core::types::pagination::PageResponse;
use plaza_entity::comment::Comment;

use crate::dto::request::CreateCommentRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/publications/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let comment = state.comment_service.create(&auth, id, req.text).await?;
    Ok(Json(ApiResponse::ok(comment)))
}

/// GET /api/publications/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Comment>>>, ApiError> {
    let result = state
        .comment_service
        .list_by_publication(id, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// DELETE /api/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.comment_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Comment deleted successfully".to_string(),
    })))
}
