//! Publication entity.

pub mod model;

pub use model::{CreatePublication, Publication};
