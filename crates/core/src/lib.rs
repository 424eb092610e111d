//! Domain layer for the Unbenched athletics site.
//!
//! Holds the entity enums and validation rules shared by the database and
//! HTTP crates, plus the object-storage abstraction and the photo
//! compression helper used by the admin upload endpoints.

pub mod error;
pub mod games;
pub mod imaging;
pub mod media;
pub mod players;
pub mod sports;
pub mod storage;
pub mod stories;
pub mod types;
