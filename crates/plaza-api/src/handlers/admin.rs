//! Admin account management handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use plaza_core::error::AppError;
use plaza_core::types::pagination::PageResponse;
use plaza_entity::user::User;
use plaza_storage::upload;

use crate::dto::request::{ChangeRoleRequest, DeleteAccountRequest, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

use super::read_image_field;
use super::user::into_profile_update;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<User>>>, ApiError> {
    require_admin(&auth)?;
    let result = state
        .admin_user_service
        .list_users(params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    require_admin(&auth)?;
    let user = state.admin_user_service.get_user(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    require_admin(&auth)?;
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let user = state
        .admin_user_service
        .update_user(&auth, id, into_profile_update(req))
        .await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    require_admin(&auth)?;
    let user = state
        .admin_user_service
        .change_role(&auth, id, &req.role)
        .await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/admin/users/{id}
///
/// No route-level admin guard here: the deletion authorization checks
/// are evaluated in a fixed order inside the service.
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<DeleteAccountRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let (user, _summary) = state
        .admin_user_service
        .delete_user(&auth, id, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("The account {} was deleted successfully", user.full_name()),
    })))
}

/// PUT /api/admin/users/{id}/image
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    require_admin(&auth)?;
    let (file_name, mime_type, data) = read_image_field(multipart).await?;

    let uploaded =
        upload::store_image(state.image_store.as_ref(), &file_name, &mime_type, data).await?;

    let user = state
        .admin_user_service
        .replace_image(&auth, id, uploaded)
        .await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/admin/users/{id}/image
pub async fn delete_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    require_admin(&auth)?;
    let user = state.admin_user_service.delete_image(&auth, id).await?;
    Ok(Json(ApiResponse::ok(user)))
}
