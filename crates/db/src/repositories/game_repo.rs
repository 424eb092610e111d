//! Repository for the `games` table.

use sqlx::PgPool;
use unbenched_core::games::STATUS_UPCOMING;
use unbenched_core::types::DbId;

use crate::models::game::{CreateGame, Game, UpdateGame};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, home_team, away_team, home_score, away_score, sport, date, status, \
                       created_at, updated_at";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row.
    ///
    /// Missing scores default to 0 and a missing status to `upcoming`.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (home_team, away_team, home_score, away_score, sport, date, status)
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, 0), $5, $6, COALESCE($7, $8))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.home_team)
            .bind(&input.away_team)
            .bind(input.home_score)
            .bind(input.away_score)
            .bind(&input.sport)
            .bind(input.date)
            .bind(&input.status)
            .bind(STATUS_UPCOMING)
            .fetch_one(pool)
            .await
    }

    /// Find a game by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all games, most recent date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    /// The `limit` most recent games (home page scoreboard).
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY date DESC, id DESC LIMIT $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a game. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGame,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET
                home_team = COALESCE($2, home_team),
                away_team = COALESCE($3, away_team),
                home_score = COALESCE($4, home_score),
                away_score = COALESCE($5, away_score),
                sport = COALESCE($6, sport),
                date = COALESCE($7, date),
                status = COALESCE($8, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(&input.home_team)
            .bind(&input.away_team)
            .bind(input.home_score)
            .bind(input.away_score)
            .bind(&input.sport)
            .bind(input.date)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a game by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
