//! Handlers for the public `/api/players` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use unbenched_core::error::require_text;
use unbenched_core::players::validate_number;
use unbenched_core::types::DbId;
use unbenched_db::models::player::{CreatePlayer, Player, UpdatePlayer};
use unbenched_db::repositories::PlayerRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/players`.
#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    pub sport_id: Option<DbId>,
}

/// Confirmation body returned by `DELETE /api/players/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /api/players?sport_id=
///
/// Active players only, ordered by jersey number.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PlayerQuery>,
) -> AppResult<Json<Vec<Player>>> {
    let players = PlayerRepo::list_active(&state.pool, params.sport_id).await?;
    Ok(Json(players))
}

/// POST /api/players
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlayer>,
) -> AppResult<(StatusCode, Json<Player>)> {
    let input = CreatePlayer {
        name: require_text("name", &input.name)?.to_string(),
        ..input
    };
    if let Some(number) = input.number {
        validate_number(number)?;
    }

    let player = PlayerRepo::create(&state.pool, &input).await?;
    tracing::info!(player_id = player.id, sport_id = player.sport_id, "Player created");
    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /api/players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Player>> {
    let player = PlayerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Player", id))?;
    Ok(Json(player))
}

/// PUT /api/players/{id}
///
/// Applies only the fields present in the body; `null` clears a nullable
/// field.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlayer>,
) -> AppResult<Json<Player>> {
    if let Some(name) = input.name.as_deref() {
        require_text("name", name)?;
    }
    if let Some(Some(number)) = input.number {
        validate_number(number)?;
    }

    let player = PlayerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Player", id))?;
    Ok(Json(player))
}

/// DELETE /api/players/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    if !PlayerRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Player", id));
    }
    tracing::info!(player_id = id, "Player deleted");
    Ok(Json(DeleteResponse {
        message: "Player deleted successfully",
    }))
}
