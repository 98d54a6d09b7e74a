//! # plaza-auth
//!
//! Credential handling for Plaza: Argon2id password hashing, the
//! password length policy, and JWT access-token encoding/decoding.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordPolicy};
