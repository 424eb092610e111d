use axum::routing::get;
use axum::Router;

use crate::handlers::sports;
use crate::state::AppState;

/// Routes mounted at `/api/sports`.
///
/// ```text
/// GET    /?slug=    -> list
/// POST   /          -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(sports::list).post(sports::create))
}
