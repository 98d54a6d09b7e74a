//! Institution management.

pub mod service;

pub use service::InstitutionService;
