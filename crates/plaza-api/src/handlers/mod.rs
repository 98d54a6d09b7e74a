//! Request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod health;
pub mod institution;
pub mod notification;
pub mod publication;
pub mod user;
pub mod ws;

use axum::extract::Multipart;
use bytes::Bytes;

use plaza_core::error::AppError;

use crate::error::ApiError;

/// Pull the `image` field out of a multipart form.
///
/// Returns the client filename, declared MIME type, and the raw bytes.
/// MIME/size validation happens in the upload pipeline, not here.
pub(crate) async fn read_image_field(
    mut multipart: Multipart,
) -> Result<(String, String, Bytes), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError(AppError::validation(format!("Multipart error: {e}"))))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(String::from)
            .ok_or_else(|| ApiError(AppError::validation("Image field has no filename")))?;
        let mime_type = field
            .content_type()
            .map(String::from)
            .ok_or_else(|| ApiError(AppError::validation("Image field has no content type")))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError(AppError::validation(format!("Failed to read image: {e}"))))?;

        return Ok((file_name, mime_type, data));
    }

    Err(ApiError(AppError::validation("No image file was provided")))
}
