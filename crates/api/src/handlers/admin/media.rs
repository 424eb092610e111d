//! Admin handlers for the media library.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use unbenched_core::error::blank_to_none;
use unbenched_core::media::{format_file_size, MediaType, MEDIA_BUCKET};
use unbenched_core::stories::file_extension;
use unbenched_core::types::DbId;
use unbenched_db::models::media::{CreateMedia, Media, UpdateMedia};
use unbenched_db::repositories::MediaRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::upload::read_upload_form;

/// A media row plus its human-readable size.
#[derive(Debug, Serialize)]
pub struct MediaItem {
    #[serde(flatten)]
    pub media: Media,
    pub size_label: String,
}

impl From<Media> for MediaItem {
    fn from(media: Media) -> Self {
        let size_label = format_file_size(media.size_bytes.max(0) as u64);
        Self { media, size_label }
    }
}

/// GET /admin/media
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MediaItem>>> {
    let media = MediaRepo::list(&state.pool).await?;
    Ok(Json(media.into_iter().map(MediaItem::from).collect()))
}

/// POST /admin/media
///
/// Multipart: one or more `file` fields and an optional `alt_text` applied
/// to each. Every file is stored under a fresh unique name.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Vec<MediaItem>>)> {
    let form = read_upload_form(multipart, "file", state.config.max_upload_bytes).await?;
    let alt_text = form.text("alt_text");

    if form.files.is_empty() {
        return Err(AppError::BadRequest("Select at least one file to upload".into()));
    }

    let mut created = Vec::with_capacity(form.files.len());
    for file in form.files {
        let object_path = match file_extension(&file.filename) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };
        state
            .storage
            .upload(MEDIA_BUCKET, &object_path, &file.bytes, false)
            .await?;

        let input = CreateMedia {
            filename: file.filename,
            url: state.storage.public_url(MEDIA_BUCKET, &object_path),
            object_path,
            alt_text: alt_text.clone(),
            media_type: MediaType::from_content_type(&file.content_type)
                .as_str()
                .to_string(),
            size_bytes: file.bytes.len() as i64,
        };
        let media = match MediaRepo::create(&state.pool, &input).await {
            Ok(media) => media,
            Err(e) => {
                discard_object(&state, &input.object_path).await;
                return Err(e.into());
            }
        };

        tracing::info!(media_id = media.id, object = %media.object_path, "Media uploaded");
        created.push(MediaItem::from(media));
    }

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /admin/media/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMedia>,
) -> AppResult<Json<MediaItem>> {
    let alt_text = blank_to_none(input.alt_text);
    let media = MediaRepo::update_alt_text(&state.pool, id, alt_text.as_deref())
        .await?
        .ok_or(AppError::not_found("Media", id))?;
    Ok(Json(MediaItem::from(media)))
}

/// DELETE /admin/media/{id}
///
/// Removes the stored object, then the row.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let media = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Media", id))?;

    state
        .storage
        .remove(MEDIA_BUCKET, &[media.object_path.as_str()])
        .await?;
    MediaRepo::delete(&state.pool, id).await?;

    tracing::info!(media_id = id, "Media deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Remove an object whose row could not be written. Failures are logged.
async fn discard_object(state: &AppState, object_path: &str) {
    if let Err(e) = state.storage.remove(MEDIA_BUCKET, &[object_path]).await {
        tracing::warn!(object = object_path, error = %e, "Failed to remove orphaned media object");
    }
}
