//! HTTP handlers grouped by resource.
//!
//! The public `/api` handlers live at the top level; the session-gated
//! `/admin` handlers live under [`admin`].

pub mod admin;
pub mod auth;
pub mod games;
pub mod pages;
pub mod players;
pub mod sports;
pub mod stories;
