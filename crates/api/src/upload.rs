//! Multipart form reading shared by the upload handlers.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;

use crate::error::{AppError, AppResult};

/// A file part of a multipart submission.
#[derive(Debug)]
pub struct UploadedFile {
    /// Client-supplied filename, or `"upload"` when none was sent.
    pub filename: String,
    /// Declared MIME type, or `application/octet-stream`.
    pub content_type: String,
    pub bytes: Bytes,
}

/// A parsed multipart submission: files under the expected field name plus
/// every plain text field.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub files: Vec<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// Trimmed value of a text field, `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// The single expected file, or 400 if none was sent.
    pub fn into_single_file(self, field: &str) -> AppResult<UploadedFile> {
        self.files
            .into_iter()
            .next()
            .ok_or_else(|| AppError::BadRequest(format!("Missing '{field}' file field")))
    }
}

/// Drain `multipart`, collecting parts named `file_field` as files.
///
/// Empty file parts (a form submitted with no file chosen) are skipped.
/// Any single file larger than `max_bytes` is rejected with 413.
pub async fn read_upload_form(
    mut multipart: Multipart,
    file_field: &str,
    max_bytes: usize,
) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        if name == file_field {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field.bytes().await.map_err(multipart_error)?;

            if bytes.is_empty() {
                continue;
            }
            if bytes.len() > max_bytes {
                return Err(AppError::PayloadTooLarge(format!(
                    "'{filename}' is {} bytes; the limit is {max_bytes}",
                    bytes.len()
                )));
            }

            form.files.push(UploadedFile {
                filename,
                content_type,
                bytes,
            });
        } else {
            let value = field.text().await.map_err(multipart_error)?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
