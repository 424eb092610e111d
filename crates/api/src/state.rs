use std::sync::Arc;

use unbenched_core::storage::StorageProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is a pool handle or an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: unbenched_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Object store for photos, banners and media uploads.
    pub storage: Arc<dyn StorageProvider>,
}
