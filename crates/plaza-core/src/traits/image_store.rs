//! Image store trait for uploaded profile image files.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// File store holding uploaded profile images.
///
/// The trait is defined here in `plaza-core` and implemented in
/// `plaza-storage`. Filenames are store-relative; callers never see
/// absolute paths.
#[async_trait]
pub trait ImageStore: Send + Sync + std::fmt::Debug + 'static {
    /// Write image bytes under the given filename.
    async fn write(&self, filename: &str, data: Bytes) -> AppResult<()>;

    /// Read a stored image into memory.
    async fn read_bytes(&self, filename: &str) -> AppResult<Bytes>;

    /// Delete a stored image.
    ///
    /// Returns a `NotFound` error when no file exists under the name,
    /// so that callers can distinguish "already absent" from an I/O
    /// failure.
    async fn delete(&self, filename: &str) -> AppResult<()>;

    /// Check whether a file exists under the given name.
    async fn exists(&self, filename: &str) -> AppResult<bool>;
}
