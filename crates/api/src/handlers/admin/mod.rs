//! Handlers for the session-gated `/admin` area.
//!
//! Each form submission maps to exactly one insert, update or delete.

pub mod dashboard;
pub mod games;
pub mod media;
pub mod players;
pub mod sports;
pub mod stories;
