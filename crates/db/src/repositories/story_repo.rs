//! Repository for the `stories` table.

use sqlx::PgPool;
use unbenched_core::types::DbId;

use crate::models::story::{CreateStory, Story, StoryLinkRow, StoryWithLinks, UpdateStory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, article, excerpt, date, banner_image_url, sport_id, game_id, \
                       photographer, journalist, created_at, updated_at";

/// Story columns qualified for the joined link query.
const LINKED_COLUMNS: &str = "st.id, st.title, st.article, st.excerpt, st.date, \
                              st.banner_image_url, st.sport_id, st.game_id, st.photographer, \
                              st.journalist, st.created_at, st.updated_at, \
                              sp.name AS sport_name, sp.slug AS sport_slug, \
                              g.home_team AS game_home_team, g.away_team AS game_away_team, \
                              g.date AS game_date";

const LINKED_FROM: &str = "stories st
             LEFT JOIN sports sp ON sp.id = st.sport_id
             LEFT JOIN games g ON g.id = st.game_id";

/// Provides CRUD operations for stories.
pub struct StoryRepo;

impl StoryRepo {
    /// Insert a new story, returning the created row.
    ///
    /// A missing excerpt is stored empty and a missing date becomes today.
    pub async fn create(pool: &PgPool, input: &CreateStory) -> Result<Story, sqlx::Error> {
        let query = format!(
            "INSERT INTO stories (title, article, excerpt, date, banner_image_url, sport_id, \
                                  game_id, photographer, journalist)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, CURRENT_DATE), $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Story>(&query)
            .bind(&input.title)
            .bind(&input.article)
            .bind(&input.excerpt)
            .bind(input.date)
            .bind(&input.banner_image_url)
            .bind(input.sport_id)
            .bind(input.game_id)
            .bind(&input.photographer)
            .bind(&input.journalist)
            .fetch_one(pool)
            .await
    }

    /// Find a story by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Story>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stories WHERE id = $1");
        sqlx::query_as::<_, Story>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all stories by publication date, newest first.
    pub async fn list_by_date(pool: &PgPool) -> Result<Vec<Story>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stories ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, Story>(&query).fetch_all(pool).await
    }

    /// The `limit` most recently created stories.
    pub async fn list_latest(pool: &PgPool, limit: i64) -> Result<Vec<Story>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM stories ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, Story>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All stories with their linked sport and game, newest first.
    pub async fn list_with_links(pool: &PgPool) -> Result<Vec<StoryWithLinks>, sqlx::Error> {
        let query = format!(
            "SELECT {LINKED_COLUMNS} FROM {LINKED_FROM}
             ORDER BY st.created_at DESC, st.id DESC"
        );
        let rows = sqlx::query_as::<_, StoryLinkRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(StoryWithLinks::from).collect())
    }

    /// A single story with its linked sport and game.
    pub async fn find_with_links(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StoryWithLinks>, sqlx::Error> {
        let query = format!("SELECT {LINKED_COLUMNS} FROM {LINKED_FROM} WHERE st.id = $1");
        let row = sqlx::query_as::<_, StoryLinkRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(StoryWithLinks::from))
    }

    /// Replace a story's editable fields. The banner is left alone.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStory,
    ) -> Result<Option<Story>, sqlx::Error> {
        let query = format!(
            "UPDATE stories SET
                title = $2, article = $3, excerpt = $4, date = $5, sport_id = $6,
                game_id = $7, photographer = $8, journalist = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Story>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.article)
            .bind(&input.excerpt)
            .bind(input.date)
            .bind(input.sport_id)
            .bind(input.game_id)
            .bind(&input.photographer)
            .bind(&input.journalist)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear (`None`) a story's banner URL.
    pub async fn set_banner_url(
        pool: &PgPool,
        id: DbId,
        url: Option<&str>,
    ) -> Result<Option<Story>, sqlx::Error> {
        let query = format!(
            "UPDATE stories SET banner_image_url = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Story>(&query)
            .bind(id)
            .bind(url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a story by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
