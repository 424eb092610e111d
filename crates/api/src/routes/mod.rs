pub mod admin;
pub mod games;
pub mod health;
pub mod pages;
pub mod players;
pub mod sports;
pub mod stories;

use axum::Router;

use crate::state::AppState;

/// Build the public `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games                       list, create
/// /sports                      list (?slug=), create
/// /stories                     list, create
/// /players                     list (?sport_id=), create
/// /players/{id}                get, update, delete
///
/// /pages/home                  top stories + recent games
/// /pages/sports/{slug}         sport + active roster
/// /pages/stories/{id}          story with linked sport/game
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", games::router())
        .nest("/sports", sports::router())
        .nest("/stories", stories::router())
        .nest("/players", players::router())
        .nest("/pages", pages::router())
}
