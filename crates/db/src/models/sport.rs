//! Sport entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unbenched_core::types::{DbId, Timestamp};

/// A sport row from the `sports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sport {
    pub id: DbId,
    pub name: String,
    /// One of `mens`, `womens`, `other`.
    pub category: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a sport. The slug is derived from `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSport {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating a sport. Absent fields are left unchanged; `null`
/// clears `description` or `image_url`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSport {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "super::present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub image_url: Option<Option<String>>,
}
