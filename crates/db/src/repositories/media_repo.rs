//! Repository for the `media` table.

use sqlx::PgPool;
use unbenched_core::types::DbId;

use crate::models::media::{CreateMedia, Media};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, filename, url, object_path, alt_text, media_type, size_bytes, \
                       created_at, updated_at";

/// Provides CRUD operations for the media library.
pub struct MediaRepo;

impl MediaRepo {
    /// Record a stored upload, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (filename, url, object_path, alt_text, media_type, size_bytes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&input.filename)
            .bind(&input.url)
            .bind(&input.object_path)
            .bind(&input.alt_text)
            .bind(&input.media_type)
            .bind(input.size_bytes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all media, most recent upload first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Media>(&query).fetch_all(pool).await
    }

    /// Set or clear a media entry's alt text.
    pub async fn update_alt_text(
        pool: &PgPool,
        id: DbId,
        alt_text: Option<&str>,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("UPDATE media SET alt_text = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(alt_text)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
