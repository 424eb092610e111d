//! Read-only page data for the public site.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use unbenched_core::types::DbId;
use unbenched_db::models::game::Game;
use unbenched_db::models::player::Player;
use unbenched_db::models::sport::Sport;
use unbenched_db::models::story::{Story, StoryWithLinks};
use unbenched_db::repositories::{GameRepo, PlayerRepo, SportRepo, StoryRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Number of stories featured on the home page.
const HOME_STORY_COUNT: i64 = 6;
/// Number of games on the home page scoreboard.
const HOME_GAME_COUNT: i64 = 3;

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub top_stories: Vec<Story>,
    pub recent_games: Vec<Game>,
}

#[derive(Debug, Serialize)]
pub struct SportPage {
    pub sport: Sport,
    pub players: Vec<Player>,
}

/// GET /api/pages/home
pub async fn home(State(state): State<AppState>) -> AppResult<Json<HomePage>> {
    let top_stories = StoryRepo::list_latest(&state.pool, HOME_STORY_COUNT).await?;
    let recent_games = GameRepo::list_recent(&state.pool, HOME_GAME_COUNT).await?;
    Ok(Json(HomePage {
        top_stories,
        recent_games,
    }))
}

/// GET /api/pages/sports/{slug}
///
/// The sport and its active roster.
pub async fn sport(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<SportPage>> {
    let sport = SportRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Sport '{slug}' not found")))?;
    let players = PlayerRepo::list_active(&state.pool, Some(sport.id)).await?;
    Ok(Json(SportPage { sport, players }))
}

/// GET /api/pages/stories/{id}
pub async fn story(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StoryWithLinks>> {
    let story = StoryRepo::find_with_links(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Story", id))?;
    Ok(Json(story))
}
