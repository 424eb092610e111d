//! Admin handlers for rosters and player photos.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use unbenched_core::error::{blank_to_none, require_text};
use unbenched_core::imaging::compress_photo;
use unbenched_core::players::{photo_object_path, validate_number, PLAYERS_BUCKET};
use unbenched_core::types::DbId;
use unbenched_db::models::player::{CreatePlayer, Player, PlayerProfile};
use unbenched_db::repositories::{PlayerRepo, SportRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::upload::read_upload_form;

/// GET /admin/sports/{id}/players
///
/// The full roster, inactive players included.
pub async fn list_by_sport(
    State(state): State<AppState>,
    Path(sport_id): Path<DbId>,
) -> AppResult<Json<Vec<Player>>> {
    SportRepo::find_by_id(&state.pool, sport_id)
        .await?
        .ok_or(AppError::not_found("Sport", sport_id))?;
    let players = PlayerRepo::list_by_sport(&state.pool, sport_id).await?;
    Ok(Json(players))
}

/// POST /admin/sports/{id}/players
///
/// New roster entries start active.
pub async fn create(
    State(state): State<AppState>,
    Path(sport_id): Path<DbId>,
    Json(profile): Json<PlayerProfile>,
) -> AppResult<(StatusCode, Json<Player>)> {
    SportRepo::find_by_id(&state.pool, sport_id)
        .await?
        .ok_or(AppError::not_found("Sport", sport_id))?;
    let profile = clean_profile(profile)?;

    let input = CreatePlayer {
        sport_id,
        name: profile.name,
        number: profile.number,
        position: profile.position,
        bio: profile.bio,
        photo_url: None,
        height: profile.height,
        weight: profile.weight,
        year: profile.year,
        hometown: profile.hometown,
        major: profile.major,
        is_active: Some(true),
    };
    let player = PlayerRepo::create(&state.pool, &input).await?;

    tracing::info!(player_id = player.id, sport_id, "Player added to roster");
    Ok((StatusCode::CREATED, Json(player)))
}

/// PUT /admin/players/{id}
///
/// Replaces the profile fields with exactly what the form submitted.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(profile): Json<PlayerProfile>,
) -> AppResult<Json<Player>> {
    let profile = clean_profile(profile)?;
    let player = PlayerRepo::replace_profile(&state.pool, id, &profile)
        .await?
        .ok_or(AppError::not_found("Player", id))?;

    tracing::info!(player_id = id, "Player updated");
    Ok(Json(player))
}

/// DELETE /admin/players/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !PlayerRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Player", id));
    }
    tracing::info!(player_id = id, "Player deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /admin/players/{id}/photo
///
/// Multipart field `file`. The image is downscaled and re-encoded as JPEG,
/// then stored at `players/{sport_id}/{player_id}.jpg`, replacing any
/// previous photo.
pub async fn upload_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Player>> {
    let player = PlayerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Player", id))?;

    let file = read_upload_form(multipart, "file", state.config.max_upload_bytes)
        .await?
        .into_single_file("file")?;

    let original_size = file.bytes.len();
    let bytes = tokio::task::spawn_blocking(move || compress_photo(&file.bytes))
        .await
        .map_err(|e| AppError::InternalError(format!("Photo compression task failed: {e}")))??;

    let object_path = photo_object_path(player.sport_id, player.id);
    state
        .storage
        .upload(PLAYERS_BUCKET, &object_path, &bytes, true)
        .await?;

    let url = state.storage.public_url(PLAYERS_BUCKET, &object_path);
    let player = PlayerRepo::set_photo_url(&state.pool, id, &url)
        .await?
        .ok_or(AppError::not_found("Player", id))?;

    tracing::info!(
        player_id = id,
        original_size,
        stored_size = bytes.len(),
        "Player photo uploaded"
    );
    Ok(Json(player))
}

/// Trim the name, validate the number and collapse blank optional fields.
fn clean_profile(profile: PlayerProfile) -> AppResult<PlayerProfile> {
    let name = require_text("name", &profile.name)?.to_string();
    if let Some(number) = profile.number {
        validate_number(number)?;
    }
    Ok(PlayerProfile {
        name,
        number: profile.number,
        position: blank_to_none(profile.position),
        bio: blank_to_none(profile.bio),
        height: blank_to_none(profile.height),
        weight: blank_to_none(profile.weight),
        year: blank_to_none(profile.year),
        hometown: blank_to_none(profile.hometown),
        major: blank_to_none(profile.major),
    })
}
