//! Institution handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use plaza_core::error::AppError;
use plaza_core::types::pagination::PageResponse;
use plaza_entity::institution::Institution;
use plaza_service::institution::service::NewInstitution;

use crate::dto::request::CreateInstitutionRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/institutions
pub async fn create_institution(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateInstitutionRequest>,
) -> Result<Json<ApiResponse<Institution>>, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let institution = state
        .institution_service
        .create(
            &auth,
            NewInstitution {
                name: req.name,
                description: req.description,
                address: req.address,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(institution)))
}

/// GET /api/institutions
pub async fn list_institutions(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Institution>>>, ApiError> {
    let result = state
        .institution_service
        .list(params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/institutions/{id}
pub async fn get_institution(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Institution>>, ApiError> {
    let institution = state.institution_service.get(id).await?;
    Ok(Json(ApiResponse::ok(institution)))
}

/// DELETE /api/institutions/{id}
pub async fn delete_institution(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.institution_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Institution deleted successfully".to_string(),
    })))
}
