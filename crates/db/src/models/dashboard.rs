//! Admin dashboard summary.

use serde::Serialize;
use sqlx::FromRow;

/// Row counts shown on the admin dashboard cards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentCounts {
    pub sports: i64,
    pub players: i64,
    pub games: i64,
    pub stories: i64,
    pub media: i64,
}
