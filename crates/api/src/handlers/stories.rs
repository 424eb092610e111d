//! Handlers for the public `/api/stories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use unbenched_core::error::{blank_to_none, require_text};
use unbenched_db::models::story::{CreateStory, Story};
use unbenched_db::repositories::StoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Story>>> {
    let stories = StoryRepo::list_by_date(&state.pool).await?;
    Ok(Json(stories))
}

/// POST /api/stories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStory>,
) -> AppResult<(StatusCode, Json<Story>)> {
    let story = insert_story(&state, input).await?;
    Ok((StatusCode::CREATED, Json(story)))
}

/// Validate and insert a story. Missing excerpt is stored empty and a
/// missing date becomes today.
pub(crate) async fn insert_story(state: &AppState, input: CreateStory) -> AppResult<Story> {
    let input = CreateStory {
        title: require_text("title", &input.title)?.to_string(),
        article: require_text("article", &input.article)?.to_string(),
        excerpt: input.excerpt.map(|e| e.trim().to_string()),
        banner_image_url: blank_to_none(input.banner_image_url),
        photographer: blank_to_none(input.photographer),
        journalist: blank_to_none(input.journalist),
        ..input
    };

    let story = StoryRepo::create(&state.pool, &input).await?;
    tracing::info!(story_id = story.id, "Story created");
    Ok(story)
}
