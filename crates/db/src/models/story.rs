//! Story entity model, DTOs and joined views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unbenched_core::types::{DbId, Timestamp};

/// A story row from the `stories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Story {
    pub id: DbId,
    pub title: String,
    pub article: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub banner_image_url: Option<String>,
    pub sport_id: Option<DbId>,
    pub game_id: Option<DbId>,
    pub photographer: Option<String>,
    pub journalist: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a story. The banner is uploaded separately.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStory {
    pub title: String,
    pub article: String,
    pub excerpt: Option<String>,
    /// Defaults to today if omitted.
    pub date: Option<NaiveDate>,
    pub banner_image_url: Option<String>,
    pub sport_id: Option<DbId>,
    pub game_id: Option<DbId>,
    pub photographer: Option<String>,
    pub journalist: Option<String>,
}

/// DTO for the story edit form.
///
/// The form always submits every editable field, so this replaces them
/// wholesale: a `None` link or byline clears the stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStory {
    pub title: String,
    pub article: String,
    #[serde(default)]
    pub excerpt: String,
    pub date: NaiveDate,
    pub sport_id: Option<DbId>,
    pub game_id: Option<DbId>,
    pub photographer: Option<String>,
    pub journalist: Option<String>,
}

/// Linked sport summary embedded in [`StoryWithLinks`].
#[derive(Debug, Clone, Serialize)]
pub struct SportLink {
    pub name: String,
    pub slug: String,
}

/// Linked game summary embedded in [`StoryWithLinks`].
#[derive(Debug, Clone, Serialize)]
pub struct GameLink {
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
}

/// A story together with summaries of its linked sport and game.
#[derive(Debug, Clone, Serialize)]
pub struct StoryWithLinks {
    #[serde(flatten)]
    pub story: Story,
    pub sport: Option<SportLink>,
    pub game: Option<GameLink>,
}

/// Flat row produced by the `stories LEFT JOIN sports LEFT JOIN games` query.
#[derive(Debug, FromRow)]
pub struct StoryLinkRow {
    #[sqlx(flatten)]
    pub story: Story,
    pub sport_name: Option<String>,
    pub sport_slug: Option<String>,
    pub game_home_team: Option<String>,
    pub game_away_team: Option<String>,
    pub game_date: Option<NaiveDate>,
}

impl From<StoryLinkRow> for StoryWithLinks {
    fn from(row: StoryLinkRow) -> Self {
        let sport = match (row.sport_name, row.sport_slug) {
            (Some(name), Some(slug)) => Some(SportLink { name, slug }),
            _ => None,
        };
        let game = match (row.game_home_team, row.game_away_team, row.game_date) {
            (Some(home_team), Some(away_team), Some(date)) => Some(GameLink {
                home_team,
                away_team,
                date,
            }),
            _ => None,
        };
        Self {
            story: row.story,
            sport,
            game,
        }
    }
}
