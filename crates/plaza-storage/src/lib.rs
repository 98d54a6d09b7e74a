//! # plaza-storage
//!
//! Filesystem-backed profile image store and the upload validation
//! pipeline. The [`plaza_core::traits::ImageStore`] trait is implemented
//! here for the local filesystem.

pub mod local;
pub mod upload;

pub use local::LocalImageStore;
pub use upload::UploadedImage;
