//! # plaza-entity
//!
//! Domain entity models for Plaza: users, institutions, publications,
//! comments, and notifications. All models derive `sqlx::FromRow` for
//! repository queries and `serde::Serialize` for API responses.

pub mod comment;
pub mod institution;
pub mod notification;
pub mod publication;
pub mod user;
