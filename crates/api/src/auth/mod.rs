//! Authentication primitives for the admin area.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- signed session cookies backed by `user_sessions` rows.

pub mod password;
pub mod session;
