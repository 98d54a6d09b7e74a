//! Publication handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use plaza_core::error::AppError;
use plaza_core::types::pagination::PageResponse;
use plaza_entity::publication::Publication;
use plaza_service::publication::service::NewPublication;

use crate::dto::request::CreatePublicationRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/publications
pub async fn create_publication(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePublicationRequest>,
) -> Result<Json<ApiResponse<Publication>>, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let publication = state
        .publication_service
        .create(
            &auth,
            NewPublication {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(publication)))
}

/// GET /api/publications/{id}
pub async fn get_publication(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Publication>>, ApiError> {
    let publication = state.publication_service.get(id).await?;
    Ok(Json(ApiResponse::ok(publication)))
}

/// GET /api/institutions/{id}/publications
pub async fn list_institution_publications(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Publication>>>, ApiError> {
    let result = state
        .publication_service
        .list_by_institution(id, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// DELETE /api/publications/{id}
pub async fn delete_publication(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.publication_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Publication deleted successfully".to_string(),
    })))
}
