//! Unbenched athletics CMS server library.
//!
//! Exposes config, state, error handling, auth and routes so integration
//! tests and the binary entrypoint share one router.

pub mod auth;
pub mod background;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod upload;
