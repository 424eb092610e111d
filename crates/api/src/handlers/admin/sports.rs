//! Admin handlers for sports.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use unbenched_core::error::{blank_to_none, require_text, CoreError};
use unbenched_core::sports::{slug_for_name, validate_category, SportCategory};
use unbenched_core::types::DbId;
use unbenched_db::models::sport::{CreateSport, Sport, UpdateSport};
use unbenched_db::repositories::SportRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::sports::insert_sport;
use crate::state::AppState;

/// A sport plus the heading of the category group it is listed under.
#[derive(Debug, Serialize)]
pub struct SportItem {
    #[serde(flatten)]
    pub sport: Sport,
    pub category_label: &'static str,
}

impl SportItem {
    fn new(sport: Sport) -> Result<Self, CoreError> {
        let category_label = SportCategory::parse(&sport.category)?.label();
        Ok(Self {
            sport,
            category_label,
        })
    }
}

/// GET /admin/sports
///
/// Grouped by category (men's, women's, other), then by name.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SportItem>>> {
    let sports = SportRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(SportItem::new)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(sports))
}

/// POST /admin/sports
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSport>,
) -> AppResult<(StatusCode, Json<Sport>)> {
    let sport = insert_sport(&state, input).await?;
    Ok((StatusCode::CREATED, Json(sport)))
}

/// PUT /admin/sports/{id}
///
/// Renaming a sport regenerates its slug.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSport>,
) -> AppResult<Json<Sport>> {
    let name = match input.name.as_deref() {
        Some(name) => Some(require_text("name", name)?.to_string()),
        None => None,
    };
    if let Some(category) = input.category.as_deref() {
        validate_category(category)?;
    }
    let slug = name.as_deref().map(slug_for_name).transpose()?;

    let input = UpdateSport {
        name,
        category: input.category,
        description: input.description.map(blank_to_none),
        image_url: input.image_url.map(blank_to_none),
    };
    let sport = SportRepo::update(&state.pool, id, &input, slug.as_deref())
        .await?
        .ok_or(AppError::not_found("Sport", id))?;

    tracing::info!(sport_id = id, slug = %sport.slug, "Sport updated");
    Ok(Json(sport))
}

/// DELETE /admin/sports/{id}
///
/// Removes the sport's players with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !SportRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Sport", id));
    }
    tracing::info!(sport_id = id, "Sport deleted");
    Ok(StatusCode::NO_CONTENT)
}
