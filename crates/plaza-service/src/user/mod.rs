//! Account-lifecycle component.
//!
//! Split by concern: [`service`] for self-service operations,
//! [`admin`] for administrative management, [`cascade`] for the ordered
//! deletion of owned data, [`image`] for the profile image lifecycle,
//! [`policy`] for the authorization matrix and field allow-lists, and
//! [`bootstrap`] for seeding the reserved administrator.

pub mod admin;
pub mod bootstrap;
pub mod cascade;
pub mod image;
pub mod policy;
pub mod service;

pub use admin::AdminUserService;
pub use cascade::CascadeSummary;
pub use policy::{AccountPolicy, ProfileUpdate};
pub use service::UserService;
