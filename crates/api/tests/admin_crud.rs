//! Integration tests for the admin content forms.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete_with_cookie, get_with_cookie, json_request};
use serde_json::{json, Value};
use sqlx::PgPool;

struct Admin {
    test: common::TestApp,
    cookie: String,
}

impl Admin {
    async fn sign_in(pool: PgPool) -> Self {
        let test = common::build_test_app(pool.clone());
        let cookie = common::login_cookie(&pool, test.app()).await;
        Self { test, cookie }
    }

    async fn send(&self, method: Method, uri: &str, body: Value) -> axum::http::Response<axum::body::Body> {
        json_request(self.test.app(), method, uri, body, Some(&self.cookie)).await
    }

    async fn create(&self, uri: &str, body: Value) -> Value {
        let response = self.send(Method::POST, uri, body).await;
        assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
        body_json(response).await
    }

    async fn list(&self, uri: &str) -> Value {
        let response = get_with_cookie(self.test.app(), uri, Some(&self.cookie)).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        body_json(response).await
    }

    async fn delete(&self, uri: &str) -> StatusCode {
        delete_with_cookie(self.test.app(), uri, Some(&self.cookie))
            .await
            .status()
    }
}

fn len(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}

// ---------------------------------------------------------------------------
// Sports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn sports_form_round_trip(pool: PgPool) {
    let admin = Admin::sign_in(pool).await;

    let sport = admin
        .create(
            "/admin/sports",
            json!({ "name": "Cross Country", "category": "womens", "description": "5K" }),
        )
        .await;
    assert_eq!(sport["slug"], "cross-country");

    let uri = format!("/admin/sports/{}", sport["id"]);
    let response = admin
        .send(Method::PUT, &uri, json!({ "name": "XC & Track" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["slug"], "xc-track");
    assert_eq!(updated["category"], "womens");
    assert_eq!(updated["description"], "5K");

    // Blank or null clears optional text; absent keeps it.
    let response = admin
        .send(Method::PUT, &uri, json!({ "description": "", "image_url": null }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cleared = body_json(response).await;
    assert_eq!(cleared["description"], Value::Null);
    assert_eq!(cleared["image_url"], Value::Null);
    assert_eq!(cleared["name"], "XC & Track");

    let listed = admin.list("/admin/sports").await;
    assert_eq!(listed[0]["category_label"], "Women's Sports");

    let response = admin
        .send(Method::PUT, &uri, json!({ "category": "mixed" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(admin.delete(&uri).await, StatusCode::NO_CONTENT);
    assert_eq!(len(&admin.list("/admin/sports").await), 0);
    assert_eq!(admin.delete(&uri).await, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Rosters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn roster_includes_inactive_and_profile_edits_replace(pool: PgPool) {
    let admin = Admin::sign_in(pool).await;
    let sport = admin
        .create("/admin/sports", json!({ "name": "Baseball", "category": "mens" }))
        .await;
    let roster_uri = format!("/admin/sports/{}/players", sport["id"]);

    let player = admin
        .create(
            &roster_uri,
            json!({ "name": "  Ace  ", "number": 21, "position": "P", "hometown": "Toledo", "major": "" }),
        )
        .await;
    assert_eq!(player["name"], "Ace");
    assert_eq!(player["is_active"], true);
    assert_eq!(player["major"], Value::Null);

    // Retire the player through the public API; the admin roster still lists them.
    let player_uri = format!("/api/players/{}", player["id"]);
    json_request(
        admin.test.app(),
        Method::PUT,
        &player_uri,
        json!({ "is_active": false }),
        None,
    )
    .await;
    let roster = admin.list(&roster_uri).await;
    assert_eq!(len(&roster), 1);
    assert_eq!(roster[0]["is_active"], false);

    let admin_player_uri = format!("/admin/players/{}", player["id"]);
    let response = admin
        .send(Method::PUT, &admin_player_uri, json!({ "name": "Ace", "number": 22 }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let edited = body_json(response).await;
    assert_eq!(edited["number"], 22);
    assert_eq!(edited["position"], Value::Null);
    assert_eq!(edited["hometown"], Value::Null);

    let response = admin
        .send(Method::PUT, &admin_player_uri, json!({ "name": " " }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(admin.delete(&admin_player_uri).await, StatusCode::NO_CONTENT);
    assert_eq!(len(&admin.list(&roster_uri).await), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn roster_for_missing_sport_is_not_found(pool: PgPool) {
    let admin = Admin::sign_in(pool).await;

    let response = get_with_cookie(admin.test.app(), "/admin/sports/4242/players", Some(&admin.cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = admin
        .send(Method::POST, "/admin/sports/4242/players", json!({ "name": "Ghost" }))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn games_form_round_trip(pool: PgPool) {
    let admin = Admin::sign_in(pool).await;

    let game = admin
        .create(
            "/admin/games",
            json!({ "home_team": "Owls", "away_team": "Hawks", "sport": "Soccer", "date": "2024-09-14" }),
        )
        .await;
    assert_eq!(game["status"], "upcoming");

    let uri = format!("/admin/games/{}", game["id"]);
    let response = admin
        .send(
            Method::PUT,
            &uri,
            json!({ "home_score": 2, "away_score": 1, "status": "final" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["home_score"], 2);
    assert_eq!(updated["status"], "final");
    assert_eq!(updated["away_team"], "Hawks");

    let response = admin.send(Method::PUT, &uri, json!({ "home_score": -1 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(len(&admin.list("/admin/games").await), 1);
    assert_eq!(admin.delete(&uri).await, StatusCode::NO_CONTENT);
    assert_eq!(len(&admin.list("/admin/games").await), 0);
}

// ---------------------------------------------------------------------------
// Stories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn stories_form_links_and_full_update(pool: PgPool) {
    let admin = Admin::sign_in(pool).await;
    let sport = admin
        .create("/admin/sports", json!({ "name": "Softball", "category": "womens" }))
        .await;

    let story = admin
        .create(
            "/admin/stories",
            json!({
                "title": "Walk-off", "article": "Bottom of the seventh.",
                "date": "2024-04-20", "sport_id": sport["id"], "journalist": "Ana"
            }),
        )
        .await;

    let listed = admin.list("/admin/stories").await;
    assert_eq!(listed[0]["sport"]["slug"], "softball");
    assert_eq!(listed[0]["game"], Value::Null);

    let uri = format!("/admin/stories/{}", story["id"]);
    let response = admin
        .send(
            Method::PUT,
            &uri,
            json!({ "title": "Walk-off win", "article": "Bottom of the seventh.", "date": "2024-04-21" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Walk-off win");
    assert_eq!(updated["sport_id"], Value::Null);
    assert_eq!(updated["journalist"], Value::Null);
    assert_eq!(updated["excerpt"], "");

    assert_eq!(admin.delete(&uri).await, StatusCode::NO_CONTENT);
    assert_eq!(len(&admin.list("/admin/stories").await), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn story_form_options_sort_sports_by_name(pool: PgPool) {
    let admin = Admin::sign_in(pool).await;
    for (name, category) in [("Wrestling", "mens"), ("Archery", "womens"), ("Lacrosse", "mens")] {
        admin
            .create("/admin/sports", json!({ "name": name, "category": category }))
            .await;
    }
    for date in ["2024-03-01", "2024-05-01"] {
        admin
            .create(
                "/admin/games",
                json!({ "home_team": "Owls", "away_team": "Hawks", "sport": "Lacrosse", "date": date }),
            )
            .await;
    }

    let options = admin.list("/admin/stories/form-options").await;
    let sports: Vec<&str> = options["sports"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(sports, vec!["Archery", "Lacrosse", "Wrestling"]);
    assert_eq!(options["games"][0]["date"], "2024-05-01");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn story_without_title_is_rejected(pool: PgPool) {
    let admin = Admin::sign_in(pool).await;

    let response = admin
        .send(Method::POST, "/admin/stories", json!({ "title": "", "article": "Body" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Dashboard counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_counts_follow_content(pool: PgPool) {
    let admin = Admin::sign_in(pool).await;
    let sport = admin
        .create("/admin/sports", json!({ "name": "Rowing", "category": "womens" }))
        .await;
    admin
        .create(
            &format!("/admin/sports/{}/players", sport["id"]),
            json!({ "name": "Stroke" }),
        )
        .await;
    admin
        .create("/admin/stories", json!({ "title": "Regatta", "article": "Fast." }))
        .await;

    let dashboard = admin.list("/admin").await;
    assert_eq!(dashboard["counts"]["sports"], 1);
    assert_eq!(dashboard["counts"]["players"], 1);
    assert_eq!(dashboard["counts"]["stories"], 1);
    assert_eq!(dashboard["counts"]["games"], 0);
    assert_eq!(dashboard["sections"][0]["path"], "/admin/sports");
    assert_eq!(dashboard["sections"][0]["count"], 1);
}
