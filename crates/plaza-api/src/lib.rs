//! # plaza-api
//!
//! HTTP boundary for Plaza: the Axum router, request handlers, DTOs,
//! the authentication extractor, error-to-status mapping, and the
//! WebSocket event feed.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
