//! Story banner naming helpers.

use crate::types::DbId;

/// Storage bucket holding story banner images.
pub const STORY_IMAGES_BUCKET: &str = "story-images";

/// Extension used when an uploaded banner has none.
const DEFAULT_BANNER_EXTENSION: &str = "jpg";

/// Object name for a story's banner: `story-{id}.{ext}`.
///
/// The extension comes from the uploaded filename, lowercased.
pub fn banner_object_name(story_id: DbId, original_filename: &str) -> String {
    let ext = file_extension(original_filename).unwrap_or_else(|| DEFAULT_BANNER_EXTENSION.into());
    format!("story-{story_id}.{ext}")
}

/// Lowercased extension of `filename`, if it has a non-empty one.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Last path segment of a public object URL, ignoring any query string.
pub fn object_name_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().filter(|s| !s.is_empty())
}
