use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at `/api/pages`.
///
/// ```text
/// GET    /home              -> home
/// GET    /sports/{slug}     -> sport
/// GET    /stories/{id}      -> story
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(pages::home))
        .route("/sports/{slug}", get(pages::sport))
        .route("/stories/{id}", get(pages::story))
}
