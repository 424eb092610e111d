//! Admin handlers for the game schedule and scores.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use unbenched_core::error::require_text;
use unbenched_core::games::{validate_score, validate_status};
use unbenched_core::types::DbId;
use unbenched_db::models::game::{CreateGame, Game, UpdateGame};
use unbenched_db::repositories::GameRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::games::insert_game;
use crate::state::AppState;

/// GET /admin/games
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Game>>> {
    let games = GameRepo::list(&state.pool).await?;
    Ok(Json(games))
}

/// POST /admin/games
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGame>,
) -> AppResult<(StatusCode, Json<Game>)> {
    let game = insert_game(&state, input).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// PUT /admin/games/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGame>,
) -> AppResult<Json<Game>> {
    for (field, value) in [
        ("home_team", input.home_team.as_deref()),
        ("away_team", input.away_team.as_deref()),
        ("sport", input.sport.as_deref()),
    ] {
        if let Some(value) = value {
            require_text(field, value)?;
        }
    }
    if let Some(score) = input.home_score {
        validate_score("home_score", score)?;
    }
    if let Some(score) = input.away_score {
        validate_score("away_score", score)?;
    }
    if let Some(status) = input.status.as_deref() {
        validate_status(status)?;
    }

    let game = GameRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Game", id))?;

    tracing::info!(game_id = id, status = %game.status, "Game updated");
    Ok(Json(game))
}

/// DELETE /admin/games/{id}
///
/// Stories linked to the game keep existing with the link cleared.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !GameRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Game", id));
    }
    tracing::info!(game_id = id, "Game deleted");
    Ok(StatusCode::NO_CONTENT)
}
