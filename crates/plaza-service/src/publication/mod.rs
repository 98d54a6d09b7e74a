//! Publication management.

pub mod service;

pub use service::PublicationService;
