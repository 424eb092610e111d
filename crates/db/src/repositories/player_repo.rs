//! Repository for the `players` table.

use sqlx::PgPool;
use unbenched_core::types::DbId;

use crate::models::player::{CreatePlayer, Player, PlayerProfile, UpdatePlayer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sport_id, name, number, position, bio, photo_url, height, weight, \
                       year, hometown, major, is_active, created_at, updated_at";

/// Inner value of a clearable text field.
fn text(field: &Option<Option<String>>) -> Option<&str> {
    field.as_ref().and_then(|v| v.as_deref())
}

/// Provides CRUD operations for roster entries.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Insert a new player, returning the created row.
    ///
    /// If `is_active` is `None` in the input, the player starts active.
    pub async fn create(pool: &PgPool, input: &CreatePlayer) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (sport_id, name, number, position, bio, photo_url, height, \
                                  weight, year, hometown, major, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, COALESCE($12, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(input.sport_id)
            .bind(&input.name)
            .bind(input.number)
            .bind(&input.position)
            .bind(&input.bio)
            .bind(&input.photo_url)
            .bind(&input.height)
            .bind(&input.weight)
            .bind(&input.year)
            .bind(&input.hometown)
            .bind(&input.major)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a player by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active players ordered by jersey number, optionally for one
    /// sport only. Players without a number sort last.
    pub async fn list_active(
        pool: &PgPool,
        sport_id: Option<DbId>,
    ) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM players
             WHERE is_active = true
               AND ($1::BIGINT IS NULL OR sport_id = $1)
             ORDER BY number ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(sport_id)
            .fetch_all(pool)
            .await
    }

    /// List every player of a sport, active or not, ordered by number.
    pub async fn list_by_sport(pool: &PgPool, sport_id: DbId) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM players
             WHERE sport_id = $1
             ORDER BY number ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(sport_id)
            .fetch_all(pool)
            .await
    }

    /// Update a player. `None` fields are left unchanged; `Some(None)`
    /// clears a nullable field.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlayer,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!(
            "UPDATE players SET
                name = COALESCE($2, name),
                number = CASE WHEN $3 THEN $4 ELSE number END,
                position = CASE WHEN $5 THEN $6 ELSE position END,
                bio = CASE WHEN $7 THEN $8 ELSE bio END,
                photo_url = CASE WHEN $9 THEN $10 ELSE photo_url END,
                height = CASE WHEN $11 THEN $12 ELSE height END,
                weight = CASE WHEN $13 THEN $14 ELSE weight END,
                year = CASE WHEN $15 THEN $16 ELSE year END,
                hometown = CASE WHEN $17 THEN $18 ELSE hometown END,
                major = CASE WHEN $19 THEN $20 ELSE major END,
                is_active = COALESCE($21, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );

        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.number.is_some())
            .bind(input.number.flatten())
            .bind(input.position.is_some())
            .bind(text(&input.position))
            .bind(input.bio.is_some())
            .bind(text(&input.bio))
            .bind(input.photo_url.is_some())
            .bind(text(&input.photo_url))
            .bind(input.height.is_some())
            .bind(text(&input.height))
            .bind(input.weight.is_some())
            .bind(text(&input.weight))
            .bind(input.year.is_some())
            .bind(text(&input.year))
            .bind(input.hometown.is_some())
            .bind(text(&input.hometown))
            .bind(input.major.is_some())
            .bind(text(&input.major))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a player's profile fields exactly as submitted.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace_profile(
        pool: &PgPool,
        id: DbId,
        profile: &PlayerProfile,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!(
            "UPDATE players SET
                name = $2, number = $3, position = $4, bio = $5, height = $6,
                weight = $7, year = $8, hometown = $9, major = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .bind(&profile.name)
            .bind(profile.number)
            .bind(&profile.position)
            .bind(&profile.bio)
            .bind(&profile.height)
            .bind(&profile.weight)
            .bind(&profile.year)
            .bind(&profile.hometown)
            .bind(&profile.major)
            .fetch_optional(pool)
            .await
    }

    /// Point a player at a newly stored photo.
    pub async fn set_photo_url(
        pool: &PgPool,
        id: DbId,
        photo_url: &str,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("UPDATE players SET photo_url = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .bind(photo_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a player by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
