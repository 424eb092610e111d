//! Entity models and DTOs.
//!
//! Row structs derive `FromRow` + `Serialize`; `Create*` / `Update*` DTOs
//! derive `Deserialize` so handlers can bind request bodies to them
//! directly.
//!
//! Partial-update DTOs use `Option<Option<T>>` for nullable columns: an
//! absent key keeps the stored value, an explicit `null` clears it.

pub mod dashboard;
pub mod game;
pub mod media;
pub mod player;
pub mod session;
pub mod sport;
pub mod story;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserialize a present key (including `null`) as `Some(..)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
