//! User self-service handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;
use validator::Validate;

use plaza_core::error::AppError;
use plaza_entity::user::User;
use plaza_service::user::ProfileUpdate;
use plaza_storage::upload;

use crate::dto::request::{ChangePasswordRequest, DeleteAccountRequest, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

use super::read_image_field;

/// GET /api/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let user = state
        .user_service
        .update_profile(&auth, into_profile_update(req))
        .await?;

    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/users/me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .user_service
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password updated successfully".to_string(),
    })))
}

/// DELETE /api/users/me
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<DeleteAccountRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let (user, _summary) = state.user_service.delete_account(&auth, &req.password).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("The account {} was deleted successfully", user.full_name()),
    })))
}

/// PUT /api/users/me/image
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let (file_name, mime_type, data) = read_image_field(multipart).await?;

    let uploaded =
        upload::store_image(state.image_store.as_ref(), &file_name, &mime_type, data).await?;

    let user = state.user_service.replace_image(&auth, uploaded).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/users/me/image
pub async fn delete_image(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.delete_image(&auth).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/{id}/image — serves the stored profile image.
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let user = state
        .user_repo
        .find_by_id(id)
        .await
        .map_err(ApiError)?
        .ok_or_else(|| ApiError(AppError::not_found("User not found")))?;

    let image = user
        .image_file
        .ok_or_else(|| ApiError(AppError::not_found("The user has no profile image")))?;

    let data = state.image_store.read_bytes(&image).await?;

    let content_type = match image.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    };

    Ok(([(header::CONTENT_TYPE, content_type)], data).into_response())
}

/// Convert the request DTO into the service-level payload.
pub(crate) fn into_profile_update(req: UpdateProfileRequest) -> ProfileUpdate {
    ProfileUpdate {
        name: req.name,
        surname: req.surname,
        username: req.username,
        email: req.email,
        role: req.role,
    }
}
