//! Game entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unbenched_core::types::{DbId, Timestamp};

/// A game row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    /// Free-text sport label shown on the scoreboard (e.g. `"Basketball"`).
    pub sport: String,
    pub date: NaiveDate,
    /// One of `upcoming`, `live`, `final`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a game.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGame {
    pub home_team: String,
    pub away_team: String,
    /// Defaults to 0 if omitted.
    pub home_score: Option<i32>,
    /// Defaults to 0 if omitted.
    pub away_score: Option<i32>,
    pub sport: String,
    pub date: NaiveDate,
    /// Defaults to `upcoming` if omitted.
    pub status: Option<String>,
}

/// DTO for updating a game. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGame {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub sport: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
}
