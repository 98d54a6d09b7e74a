//! Local filesystem image store.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use plaza_core::error::{AppError, ErrorKind};
use plaza_core::result::AppResult;
use plaza_core::traits::ImageStore;

/// Image store rooted at a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    /// Root directory for all stored images.
    root: PathBuf,
}

impl LocalImageStore {
    /// Create a new store rooted at the given path, creating the
    /// directory if it does not exist yet.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create image root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a store-relative filename to an absolute path.
    ///
    /// Rejects names that would escape the root directory.
    fn resolve(&self, filename: &str) -> AppResult<PathBuf> {
        if filename.is_empty() || filename.contains('/') || filename.contains("..") {
            return Err(AppError::validation(format!(
                "Invalid image filename: '{filename}'"
            )));
        }
        Ok(self.root.join(filename))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn write(&self, filename: &str, data: Bytes) -> AppResult<()> {
        let path = self.resolve(filename)?;
        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write image: {filename}"),
                e,
            )
        })?;
        debug!(filename, bytes = data.len(), "Wrote image file");
        Ok(())
    }

    async fn read_bytes(&self, filename: &str) -> AppResult<Bytes> {
        let path = self.resolve(filename)?;
        let data = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Image not found: {filename}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read image: {filename}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, filename: &str) -> AppResult<()> {
        let path = self.resolve(filename)?;
        if !path.exists() {
            return Err(AppError::not_found(format!("Image not found: {filename}")));
        }
        fs::remove_file(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete image: {filename}"),
                e,
            )
        })?;
        debug!(filename, "Deleted image file");
        Ok(())
    }

    async fn exists(&self, filename: &str) -> AppResult<bool> {
        let path = self.resolve(filename)?;
        Ok(path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_core::error::ErrorKind;

    async fn store() -> (tempfile::TempDir, LocalImageStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_write_read_delete() {
        let (_dir, store) = store().await;
        let data = Bytes::from_static(b"png bytes");

        store.write("avatar.png", data.clone()).await.unwrap();
        assert!(store.exists("avatar.png").await.unwrap());
        assert_eq!(store.read_bytes("avatar.png").await.unwrap(), data);

        store.delete("avatar.png").await.unwrap();
        assert!(!store.exists("avatar.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (_dir, store) = store().await;
        let err = store.delete("ghost.png").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let (_dir, store) = store().await;
        assert!(store.read_bytes("../escape.png").await.is_err());
        assert!(store.read_bytes("sub/dir.png").await.is_err());
    }
}
