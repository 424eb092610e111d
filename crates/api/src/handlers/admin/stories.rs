//! Admin handlers for stories and their banner images.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use unbenched_core::error::{blank_to_none, require_text};
use unbenched_core::stories::{banner_object_name, object_name_from_url, STORY_IMAGES_BUCKET};
use unbenched_core::types::DbId;
use unbenched_db::models::game::Game;
use unbenched_db::models::sport::Sport;
use unbenched_db::models::story::{CreateStory, Story, StoryWithLinks, UpdateStory};
use unbenched_db::repositories::{GameRepo, SportRepo, StoryRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::stories::insert_story;
use crate::state::AppState;
use crate::upload::read_upload_form;

/// GET /admin/stories
///
/// Newest first, with linked sport and game summaries.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StoryWithLinks>>> {
    let stories = StoryRepo::list_with_links(&state.pool).await?;
    Ok(Json(stories))
}

/// Choices for the sport and game selects on the story form.
#[derive(Debug, Serialize)]
pub struct StoryFormOptions {
    pub sports: Vec<Sport>,
    pub games: Vec<Game>,
}

/// GET /admin/stories/form-options
///
/// Sports alphabetically, games newest first.
pub async fn form_options(State(state): State<AppState>) -> AppResult<Json<StoryFormOptions>> {
    let sports = SportRepo::list_by_name(&state.pool).await?;
    let games = GameRepo::list(&state.pool).await?;
    Ok(Json(StoryFormOptions { sports, games }))
}

/// POST /admin/stories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStory>,
) -> AppResult<(StatusCode, Json<Story>)> {
    let story = insert_story(&state, input).await?;
    Ok((StatusCode::CREATED, Json(story)))
}

/// PUT /admin/stories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStory>,
) -> AppResult<Json<Story>> {
    let input = UpdateStory {
        title: require_text("title", &input.title)?.to_string(),
        article: require_text("article", &input.article)?.to_string(),
        excerpt: input.excerpt.trim().to_string(),
        photographer: blank_to_none(input.photographer),
        journalist: blank_to_none(input.journalist),
        ..input
    };

    let story = StoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Story", id))?;

    tracing::info!(story_id = id, "Story updated");
    Ok(Json(story))
}

/// DELETE /admin/stories/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let story = StoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Story", id))?;

    StoryRepo::delete(&state.pool, id).await?;
    if let Some(url) = story.banner_image_url.as_deref() {
        remove_banner_object(&state, id, url).await;
    }

    tracing::info!(story_id = id, "Story deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /admin/stories/{id}/banner
///
/// Multipart field `file`, stored as `story-images/story-{id}.{ext}`.
pub async fn upload_banner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Story>> {
    let story = StoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Story", id))?;

    let file = read_upload_form(multipart, "file", state.config.max_upload_bytes)
        .await?
        .into_single_file("file")?;

    let object_name = banner_object_name(id, &file.filename);
    state
        .storage
        .upload(STORY_IMAGES_BUCKET, &object_name, &file.bytes, true)
        .await?;

    // A banner with a different extension would otherwise be orphaned.
    if let Some(previous) = story.banner_image_url.as_deref() {
        if object_name_from_url(previous) != Some(object_name.as_str()) {
            remove_banner_object(&state, id, previous).await;
        }
    }

    let url = state.storage.public_url(STORY_IMAGES_BUCKET, &object_name);
    let story = StoryRepo::set_banner_url(&state.pool, id, Some(&url))
        .await?
        .ok_or(AppError::not_found("Story", id))?;

    tracing::info!(story_id = id, object = %object_name, size = file.bytes.len(), "Story banner uploaded");
    Ok(Json(story))
}

/// DELETE /admin/stories/{id}/banner
///
/// Clears the banner even if the stored object cannot be removed.
pub async fn remove_banner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Story>> {
    let story = StoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Story", id))?;

    if let Some(url) = story.banner_image_url.as_deref() {
        remove_banner_object(&state, id, url).await;
    }

    let story = StoryRepo::set_banner_url(&state.pool, id, None)
        .await?
        .ok_or(AppError::not_found("Story", id))?;

    tracing::info!(story_id = id, "Story banner removed");
    Ok(Json(story))
}

/// Best-effort delete of the object behind a banner URL. Failures are
/// logged and otherwise ignored.
async fn remove_banner_object(state: &AppState, story_id: DbId, url: &str) {
    let Some(object_name) = object_name_from_url(url) else {
        tracing::warn!(story_id, url, "Banner URL has no object name; skipping removal");
        return;
    };
    if let Err(e) = state.storage.remove(STORY_IMAGES_BUCKET, &[object_name]).await {
        tracing::warn!(story_id, object = object_name, error = %e, "Failed to remove banner object");
    }
}
