//! Route-level guards.

pub mod rbac;
