//! Upload validation and placement for profile images.
//!
//! The HTTP layer hands raw multipart fields to [`store_image`]; the
//! account-lifecycle service only ever sees an already-validated
//! [`UploadedImage`] descriptor.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use plaza_core::error::AppError;
use plaza_core::result::AppResult;
use plaza_core::traits::ImageStore;

/// MIME types accepted for profile images.
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

/// Maximum accepted image size in bytes.
pub const MAX_IMAGE_SIZE_BYTES: u64 = 20_000_000;

/// Descriptor of a validated, stored upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Store-relative filename the image was placed under.
    pub filename: String,
    /// MIME type declared by the client and checked against the allow-list.
    pub mime_type: String,
    /// Image size in bytes.
    pub size_bytes: u64,
}

/// Validate an upload's MIME type and size against the allow-list.
pub fn validate_upload(mime_type: &str, size_bytes: u64) -> AppResult<()> {
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(AppError::validation(format!(
            "Only the following file types are allowed: {}",
            ALLOWED_MIME_TYPES.join(", ")
        )));
    }
    if size_bytes > MAX_IMAGE_SIZE_BYTES {
        return Err(AppError::validation(format!(
            "Image exceeds the maximum size of {MAX_IMAGE_SIZE_BYTES} bytes"
        )));
    }
    Ok(())
}

/// Derive a collision-free stored filename from the original name,
/// preserving its stem and extension.
pub fn stored_filename(original: &str) -> String {
    let original = original.rsplit(['/', '\\']).next().unwrap_or(original);
    let (stem, ext) = match original.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (original, None),
    };
    let suffix = Uuid::new_v4().simple().to_string();
    match ext {
        Some(ext) => format!("{stem}-{}.{ext}", &suffix[..12]),
        None => format!("{stem}-{}", &suffix[..12]),
    }
}

/// Validate an upload and place it in the store.
///
/// Returns the descriptor the account-lifecycle component consumes;
/// nothing is written when validation fails.
pub async fn store_image(
    store: &dyn ImageStore,
    original_name: &str,
    mime_type: &str,
    data: Bytes,
) -> AppResult<UploadedImage> {
    validate_upload(mime_type, data.len() as u64)?;

    let filename = stored_filename(original_name);
    let size_bytes = data.len() as u64;
    store.write(&filename, data).await?;

    Ok(UploadedImage {
        filename,
        mime_type: mime_type.to_string(),
        size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_allowed_types() {
        assert!(validate_upload("image/png", 1024).is_ok());
        assert!(validate_upload("image/jpeg", 1024).is_ok());
        assert!(validate_upload("image/jpg", 1024).is_ok());
    }

    #[test]
    fn test_validate_rejects_other_types() {
        assert!(validate_upload("image/gif", 1024).is_err());
        assert!(validate_upload("application/pdf", 1024).is_err());
    }

    #[test]
    fn test_validate_rejects_oversized() {
        assert!(validate_upload("image/png", MAX_IMAGE_SIZE_BYTES).is_ok());
        assert!(validate_upload("image/png", MAX_IMAGE_SIZE_BYTES + 1).is_err());
    }

    #[test]
    fn test_stored_filename_keeps_stem_and_extension() {
        let name = stored_filename("futbol.png");
        assert!(name.starts_with("futbol-"));
        assert!(name.ends_with(".png"));
        assert_ne!(name, stored_filename("futbol.png"));
    }

    #[test]
    fn test_stored_filename_strips_client_paths() {
        let name = stored_filename("C:\\pictures\\me.jpg");
        assert!(name.starts_with("me-"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_stored_filename_without_extension() {
        let name = stored_filename("avatar");
        assert!(name.starts_with("avatar-"));
        assert!(!name.contains('.'));
    }

    #[tokio::test]
    async fn test_store_image_writes_and_describes() {
        let dir = tempfile::tempdir().unwrap();
        let store = crate::LocalImageStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let upload = store_image(
            &store,
            "avatar.png",
            "image/png",
            Bytes::from_static(b"data"),
        )
        .await
        .unwrap();

        assert_eq!(upload.size_bytes, 4);
        assert!(
            plaza_core::traits::ImageStore::exists(&store, &upload.filename)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_store_image_rejects_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let store = crate::LocalImageStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let result = store_image(&store, "doc.pdf", "application/pdf", Bytes::new()).await;
        assert!(result.is_err());
    }
}
