//! Handlers for the public `/api/games` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use unbenched_core::error::require_text;
use unbenched_core::games::{validate_score, validate_status};
use unbenched_db::models::game::{CreateGame, Game};
use unbenched_db::repositories::GameRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/games
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Game>>> {
    let games = GameRepo::list(&state.pool).await?;
    Ok(Json(games))
}

/// POST /api/games
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGame>,
) -> AppResult<(StatusCode, Json<Game>)> {
    let game = insert_game(&state, input).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// Validate and insert a game. Scores default to 0 and status to `upcoming`.
pub(crate) async fn insert_game(state: &AppState, input: CreateGame) -> AppResult<Game> {
    let input = CreateGame {
        home_team: require_text("home_team", &input.home_team)?.to_string(),
        away_team: require_text("away_team", &input.away_team)?.to_string(),
        sport: require_text("sport", &input.sport)?.to_string(),
        ..input
    };
    if let Some(score) = input.home_score {
        validate_score("home_score", score)?;
    }
    if let Some(score) = input.away_score {
        validate_score("away_score", score)?;
    }
    if let Some(status) = input.status.as_deref() {
        validate_status(status)?;
    }

    let game = GameRepo::create(&state.pool, &input).await?;
    tracing::info!(game_id = game.id, "Game created");
    Ok(game)
}
