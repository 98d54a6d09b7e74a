//! Registration and login handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use plaza_core::error::AppError;
use plaza_entity::user::User;
use plaza_service::auth::RegisterAccount;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let user = state
        .auth_service
        .register(RegisterAccount {
            name: req.name,
            surname: req.surname,
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(user)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let (access_token, user) = state.auth_service.login(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse { access_token, user })))
}
