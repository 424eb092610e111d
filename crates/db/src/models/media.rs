//! Media library model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unbenched_core::types::{DbId, Timestamp};

/// An uploaded file from the `media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    /// Original filename as uploaded.
    pub filename: String,
    pub url: String,
    /// Object path inside the media bucket.
    pub object_path: String,
    pub alt_text: Option<String>,
    /// `image` or `video`.
    pub media_type: String,
    pub size_bytes: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a stored upload.
#[derive(Debug, Clone)]
pub struct CreateMedia {
    pub filename: String,
    pub url: String,
    pub object_path: String,
    pub alt_text: Option<String>,
    pub media_type: String,
    pub size_bytes: i64,
}

/// DTO for editing a media entry's alt text.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMedia {
    pub alt_text: Option<String>,
}
