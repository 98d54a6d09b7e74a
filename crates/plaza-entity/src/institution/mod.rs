//! Institution entity.

pub mod model;

pub use model::{CreateInstitution, Institution};
