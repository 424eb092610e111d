use axum::routing::get;
use axum::Router;

use crate::handlers::stories;
use crate::state::AppState;

/// Routes mounted at `/api/stories`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stories::list).post(stories::create))
}
