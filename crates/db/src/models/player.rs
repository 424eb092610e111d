//! Player entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unbenched_core::types::{DbId, Timestamp};

/// A roster entry from the `players` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Player {
    pub id: DbId,
    pub sport_id: DbId,
    pub name: String,
    pub number: Option<i32>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub year: Option<String>,
    pub hometown: Option<String>,
    pub major: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a player.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlayer {
    pub sport_id: DbId,
    pub name: String,
    pub number: Option<i32>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub year: Option<String>,
    pub hometown: Option<String>,
    pub major: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating a player. Absent fields are left unchanged; `null`
/// clears a nullable field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlayer {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::present")]
    pub number: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::present")]
    pub position: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub photo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub height: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub weight: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub year: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub hometown: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub major: Option<Option<String>>,
    pub is_active: Option<bool>,
}

/// DTO for the admin roster edit form.
///
/// The form submits the whole profile; blank inputs arrive as `None` and
/// clear the stored value. Activation and photo are managed separately.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub number: Option<i32>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub year: Option<String>,
    pub hometown: Option<String>,
    pub major: Option<String>,
}
