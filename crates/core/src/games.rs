//! Game status values and score validation.

use crate::error::CoreError;

pub const STATUS_UPCOMING: &str = "upcoming";
pub const STATUS_LIVE: &str = "live";
pub const STATUS_FINAL: &str = "final";

/// Valid status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_UPCOMING, STATUS_LIVE, STATUS_FINAL];

/// Lifecycle of a scheduled game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Upcoming,
    Live,
    Final,
}

impl GameStatus {
    /// Parse from the database `status` column.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            STATUS_UPCOMING => Ok(Self::Upcoming),
            STATUS_LIVE => Ok(Self::Live),
            STATUS_FINAL => Ok(Self::Final),
            other => Err(CoreError::Validation(format!(
                "Invalid game status '{other}'. Must be one of: {VALID_STATUSES:?}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => STATUS_UPCOMING,
            Self::Live => STATUS_LIVE,
            Self::Final => STATUS_FINAL,
        }
    }
}

/// Validate a status string.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    GameStatus::parse(status).map(|_| ())
}

/// Scores are never negative.
pub fn validate_score(field: &str, score: i32) -> Result<(), CoreError> {
    if score < 0 {
        return Err(CoreError::Validation(format!(
            "'{field}' must not be negative, got {score}"
        )));
    }
    Ok(())
}
