//! Image storage configuration.

use serde::{Deserialize, Serialize};

/// Profile image storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for uploaded profile images.
    #[serde(default = "default_image_root")]
    pub image_root: String,
    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            image_root: default_image_root(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_image_root() -> String {
    "uploads/img/users".to_string()
}

fn default_max_upload() -> u64 {
    20_000_000
}
