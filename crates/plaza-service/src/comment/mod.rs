//! Comment management.

pub mod service;

pub use service::CommentService;
