//! Repository for the `sports` table.

use sqlx::PgPool;
use unbenched_core::types::DbId;

use crate::models::sport::{CreateSport, Sport, UpdateSport};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, description, image_url, slug, created_at, updated_at";

/// Provides CRUD operations for sports.
pub struct SportRepo;

impl SportRepo {
    /// Insert a new sport with a precomputed slug, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSport,
        slug: &str,
    ) -> Result<Sport, sqlx::Error> {
        let query = format!(
            "INSERT INTO sports (name, category, description, image_url, slug)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sport>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Find a sport by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sports WHERE id = $1");
        sqlx::query_as::<_, Sport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a sport by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Sport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sports WHERE slug = $1");
        sqlx::query_as::<_, Sport>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all sports grouped by category, then by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Sport>, sqlx::Error> {
        Self::list_filtered(pool, None).await
    }

    /// List sports grouped by category, optionally narrowed to one slug.
    pub async fn list_filtered(
        pool: &PgPool,
        slug: Option<&str>,
    ) -> Result<Vec<Sport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sports
             WHERE ($1::TEXT IS NULL OR slug = $1)
             ORDER BY category ASC, name ASC"
        );
        sqlx::query_as::<_, Sport>(&query)
            .bind(slug)
            .fetch_all(pool)
            .await
    }

    /// List all sports alphabetically (story form dropdown).
    pub async fn list_by_name(pool: &PgPool) -> Result<Vec<Sport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sports ORDER BY name ASC");
        sqlx::query_as::<_, Sport>(&query).fetch_all(pool).await
    }

    /// Update a sport. `None` fields are left unchanged; `Some(None)` clears
    /// `description` or `image_url`. `slug` is passed when the name changed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSport,
        slug: Option<&str>,
    ) -> Result<Option<Sport>, sqlx::Error> {
        let query = format!(
            "UPDATE sports SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                image_url = CASE WHEN $6 THEN $7 ELSE image_url END,
                slug = COALESCE($8, slug)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sport>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(input.image_url.is_some())
            .bind(input.image_url.as_ref().and_then(|v| v.as_deref()))
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a sport by ID. Its players go with it; linked stories keep
    /// existing with the link cleared. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
