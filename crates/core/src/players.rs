//! Roster rules: jersey numbers and photo object naming.

use crate::error::CoreError;
use crate::types::DbId;

/// Storage bucket holding player headshots.
pub const PLAYERS_BUCKET: &str = "players";

/// Highest jersey number accepted on a roster.
pub const MAX_JERSEY_NUMBER: i32 = 99;

/// Validate a jersey number (0..=99).
pub fn validate_number(number: i32) -> Result<(), CoreError> {
    if !(0..=MAX_JERSEY_NUMBER).contains(&number) {
        return Err(CoreError::Validation(format!(
            "Jersey number must be between 0 and {MAX_JERSEY_NUMBER}, got {number}"
        )));
    }
    Ok(())
}

/// Object path of a player's photo inside [`PLAYERS_BUCKET`].
///
/// One photo per player; re-uploads overwrite the same object.
///
/// ```
/// use unbenched_core::players::photo_object_path;
///
/// assert_eq!(photo_object_path(3, 41), "3/41.jpg");
/// ```
pub fn photo_object_path(sport_id: DbId, player_id: DbId) -> String {
    format!("{sport_id}/{player_id}.jpg")
}
