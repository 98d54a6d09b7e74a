//! # plaza-service
//!
//! Business logic for Plaza. The account-lifecycle component lives in
//! [`user`]: cascading account deletion, profile/role mutation, and the
//! profile image lifecycle. The remaining modules provide the CRUD
//! services the lifecycle depends on.

pub mod auth;
pub mod comment;
pub mod context;
pub mod institution;
pub mod notification;
pub mod publication;
pub mod user;

pub use context::RequestContext;
