use axum::routing::get;
use axum::Router;

use crate::handlers::players;
use crate::state::AppState;

/// Routes mounted at `/api/players`.
///
/// ```text
/// GET    /?sport_id=    -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(players::list).post(players::create))
        .route(
            "/{id}",
            get(players::get_by_id)
                .put(players::update)
                .delete(players::delete),
        )
}
