//! Handlers for the public `/api/sports` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use unbenched_core::error::{blank_to_none, require_text};
use unbenched_core::sports::{slug_for_name, validate_category};
use unbenched_db::models::sport::{CreateSport, Sport};
use unbenched_db::repositories::SportRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/sports`.
#[derive(Debug, Deserialize)]
pub struct SportQuery {
    pub slug: Option<String>,
}

/// GET /api/sports?slug=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SportQuery>,
) -> AppResult<Json<Vec<Sport>>> {
    let sports = SportRepo::list_filtered(&state.pool, params.slug.as_deref()).await?;
    Ok(Json(sports))
}

/// POST /api/sports
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSport>,
) -> AppResult<(StatusCode, Json<Sport>)> {
    let sport = insert_sport(&state, input).await?;
    Ok((StatusCode::CREATED, Json(sport)))
}

/// Validate and insert a sport, deriving its slug from the name.
pub(crate) async fn insert_sport(state: &AppState, input: CreateSport) -> AppResult<Sport> {
    let name = require_text("name", &input.name)?.to_string();
    validate_category(&input.category)?;
    let slug = slug_for_name(&name)?;

    let input = CreateSport {
        name,
        category: input.category,
        description: blank_to_none(input.description),
        image_url: blank_to_none(input.image_url),
    };
    let sport = SportRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(sport_id = sport.id, slug = %sport.slug, "Sport created");
    Ok(sport)
}
