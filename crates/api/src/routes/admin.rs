//! Route definitions for the `/admin` area.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin::{dashboard, games, media, players, sports, stories};
use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/admin`. The session gate is installed on the
/// top-level router (see [`crate::router::build_app_router`]) so it also
/// covers paths none of these routes match.
///
/// ```text
/// GET    /                                  -> dashboard
///
/// GET    /login                             -> login page (public)
/// POST   /login                             -> sign in (public)
/// POST   /signup                            -> create account (public)
/// POST   /logout                            -> sign out
///
/// GET    /sports                            -> list
/// POST   /sports                            -> create
/// PUT    /sports/{id}                       -> update
/// DELETE /sports/{id}                       -> delete
/// GET    /sports/{id}/players               -> roster (incl. inactive)
/// POST   /sports/{id}/players               -> add player
///
/// PUT    /players/{id}                      -> update profile
/// DELETE /players/{id}                      -> delete
/// POST   /players/{id}/photo                -> upload photo (multipart)
///
/// GET    /games                             -> list
/// POST   /games                             -> create
/// PUT    /games/{id}                        -> update
/// DELETE /games/{id}                        -> delete
///
/// GET    /stories                           -> list with links
/// GET    /stories/form-options              -> sport and game choices
/// POST   /stories                           -> create
/// PUT    /stories/{id}                      -> update
/// DELETE /stories/{id}                      -> delete
/// POST   /stories/{id}/banner               -> upload banner (multipart)
/// DELETE /stories/{id}/banner               -> remove banner
///
/// GET    /media                             -> list
/// POST   /media                             -> upload (multipart)
/// PUT    /media/{id}                        -> update alt text
/// DELETE /media/{id}                        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::show))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", post(auth::signup))
        .route("/logout", post(auth::logout))
        .route("/sports", get(sports::list).post(sports::create))
        .route("/sports/{id}", put(sports::update).delete(sports::delete))
        .route(
            "/sports/{id}/players",
            get(players::list_by_sport).post(players::create),
        )
        .route(
            "/players/{id}",
            put(players::update).delete(players::delete),
        )
        .route("/players/{id}/photo", post(players::upload_photo))
        .route("/games", get(games::list).post(games::create))
        .route("/games/{id}", put(games::update).delete(games::delete))
        .route("/stories", get(stories::list).post(stories::create))
        .route("/stories/form-options", get(stories::form_options))
        .route("/stories/{id}", put(stories::update).delete(stories::delete))
        .route(
            "/stories/{id}/banner",
            post(stories::upload_banner).delete(stories::remove_banner),
        )
        .route("/media", get(media::list).post(media::upload))
        .route("/media/{id}", put(media::update).delete(media::delete))
}
