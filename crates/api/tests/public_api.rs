//! HTTP-level tests for the public `/api` endpoints and page data.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_sport(app: axum::Router, name: &str, category: &str) -> serde_json::Value {
    let response = post_json(app, "/api/sports", json!({ "name": name, "category": category })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_player(app: axum::Router, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(app, "/api/players", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Sports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn sports_get_slugs_and_category_order(pool: PgPool) {
    let test = common::build_test_app(pool);

    let created = create_sport(test.app(), "Women's Basketball", "womens").await;
    assert_eq!(created["slug"], "womens-basketball");
    create_sport(test.app(), "Men's Basketball", "mens").await;

    let json = body_json(get(test.app(), "/api/sports").await).await;
    let categories: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["mens", "womens"]);

    let filtered = body_json(get(test.app(), "/api/sports?slug=womens-basketball").await).await;
    assert_eq!(names(&filtered), vec!["Women's Basketball"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sport_with_unknown_category_is_rejected(pool: PgPool) {
    let test = common::build_test_app(pool);
    let response = post_json(
        test.app(),
        "/api/sports",
        json!({ "name": "Quidditch", "category": "coed" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_sport_name_conflicts(pool: PgPool) {
    let test = common::build_test_app(pool);
    create_sport(test.app(), "Golf", "mens").await;

    let response = post_json(test.app(), "/api/sports", json!({ "name": "Golf", "category": "womens" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn players_are_active_only_ordered_by_number(pool: PgPool) {
    let test = common::build_test_app(pool);
    let soccer = create_sport(test.app(), "Soccer", "womens").await;
    let tennis = create_sport(test.app(), "Tennis", "mens").await;

    for (name, number) in [("Keeper", 1), ("Striker", 9), ("Back", 4)] {
        create_player(
            test.app(),
            json!({ "sport_id": soccer["id"], "name": name, "number": number }),
        )
        .await;
    }
    create_player(
        test.app(),
        json!({ "sport_id": soccer["id"], "name": "Graduated", "number": 2, "is_active": false }),
    )
    .await;
    create_player(
        test.app(),
        json!({ "sport_id": tennis["id"], "name": "Server", "number": 3 }),
    )
    .await;

    let uri = format!("/api/players?sport_id={}", soccer["id"]);
    let roster = body_json(get(test.app(), &uri).await).await;
    assert_eq!(names(&roster), vec!["Keeper", "Back", "Striker"]);

    let everyone = body_json(get(test.app(), "/api/players").await).await;
    assert_eq!(names(&everyone), vec!["Keeper", "Server", "Back", "Striker"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn player_get_update_delete(pool: PgPool) {
    let test = common::build_test_app(pool);
    let sport = create_sport(test.app(), "Volleyball", "womens").await;
    let player = create_player(
        test.app(),
        json!({ "sport_id": sport["id"], "name": "Setter", "number": 5, "hometown": "Dayton" }),
    )
    .await;
    let uri = format!("/api/players/{}", player["id"]);

    let fetched = body_json(get(test.app(), &uri).await).await;
    assert_eq!(fetched["name"], "Setter");
    assert_eq!(fetched["is_active"], true);

    let response = put_json(test.app(), &uri, json!({ "position": "S", "is_active": false })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["position"], "S");
    assert_eq!(updated["is_active"], false);
    assert_eq!(updated["hometown"], "Dayton");

    // Explicit null clears; absent keys stay.
    let response = put_json(test.app(), &uri, json!({ "number": null, "position": null })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cleared = body_json(response).await;
    assert_eq!(cleared["number"], serde_json::Value::Null);
    assert_eq!(cleared["position"], serde_json::Value::Null);
    assert_eq!(cleared["hometown"], "Dayton");
    assert_eq!(cleared["name"], "Setter");

    let response = delete(test.app(), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Player deleted successfully" })
    );

    assert_eq!(get(test.app(), &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete(test.app(), &uri).await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn player_number_out_of_range_is_rejected(pool: PgPool) {
    let test = common::build_test_app(pool);
    let sport = create_sport(test.app(), "Hockey", "mens").await;

    let response = post_json(
        test.app(),
        "/api/players",
        json!({ "sport_id": sport["id"], "name": "Goalie", "number": 100 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn player_missing_name_is_rejected(pool: PgPool) {
    let test = common::build_test_app(pool);
    let sport = create_sport(test.app(), "Hockey", "mens").await;

    let response = post_json(test.app(), "/api/players", json!({ "sport_id": sport["id"] })).await;
    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Games and stories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn games_default_scores_and_status(pool: PgPool) {
    let test = common::build_test_app(pool);

    let response = post_json(
        test.app(),
        "/api/games",
        json!({ "home_team": "Owls", "away_team": "Hawks", "sport": "Football", "date": "2024-09-07" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let game = body_json(response).await;
    assert_eq!(game["home_score"], 0);
    assert_eq!(game["away_score"], 0);
    assert_eq!(game["status"], "upcoming");

    post_json(
        test.app(),
        "/api/games",
        json!({
            "home_team": "Owls", "away_team": "Bears", "sport": "Football",
            "date": "2024-10-12", "home_score": 21, "away_score": 17, "status": "final"
        }),
    )
    .await;

    let games = body_json(get(test.app(), "/api/games").await).await;
    assert_eq!(games[0]["away_team"], "Bears");
    assert_eq!(games[1]["away_team"], "Hawks");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn game_with_unknown_status_is_rejected(pool: PgPool) {
    let test = common::build_test_app(pool);
    let response = post_json(
        test.app(),
        "/api/games",
        json!({
            "home_team": "Owls", "away_team": "Hawks", "sport": "Football",
            "date": "2024-09-07", "status": "postponed"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn stories_list_by_date(pool: PgPool) {
    let test = common::build_test_app(pool);

    for (title, date) in [("Preview", "2024-08-30"), ("Recap", "2024-09-08")] {
        let response = post_json(
            test.app(),
            "/api/stories",
            json!({ "title": title, "article": "Words.", "date": date, "journalist": "Sam" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let stories = body_json(get(test.app(), "/api/stories").await).await;
    assert_eq!(stories[0]["title"], "Recap");
    assert_eq!(stories[1]["title"], "Preview");
    assert_eq!(stories[0]["excerpt"], "");
}

// ---------------------------------------------------------------------------
// Page data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn home_page_limits_stories_and_games(pool: PgPool) {
    let test = common::build_test_app(pool);

    for i in 0..8 {
        post_json(
            test.app(),
            "/api/stories",
            json!({ "title": format!("Story {i}"), "article": "..." }),
        )
        .await;
    }
    for day in 1..=5 {
        post_json(
            test.app(),
            "/api/games",
            json!({
                "home_team": "Owls", "away_team": format!("Team {day}"),
                "sport": "Soccer", "date": format!("2024-09-0{day}")
            }),
        )
        .await;
    }

    let home = body_json(get(test.app(), "/api/pages/home").await).await;
    let stories = home["top_stories"].as_array().unwrap();
    assert_eq!(stories.len(), 6);
    assert_eq!(stories[0]["title"], "Story 7");

    let games = home["recent_games"].as_array().unwrap();
    assert_eq!(games.len(), 3);
    assert_eq!(games[0]["away_team"], "Team 5");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sport_page_shows_active_roster(pool: PgPool) {
    let test = common::build_test_app(pool);
    let sport = create_sport(test.app(), "Men's Soccer", "mens").await;
    create_player(test.app(), json!({ "sport_id": sport["id"], "name": "Nine", "number": 9 })).await;
    create_player(
        test.app(),
        json!({ "sport_id": sport["id"], "name": "Benched", "number": 3, "is_active": false }),
    )
    .await;

    let page = body_json(get(test.app(), "/api/pages/sports/mens-soccer").await).await;
    assert_eq!(page["sport"]["name"], "Men's Soccer");
    assert_eq!(names(&page["players"]), vec!["Nine"]);

    let missing = get(test.app(), "/api/pages/sports/curling").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn story_page_includes_links(pool: PgPool) {
    let test = common::build_test_app(pool);
    let sport = create_sport(test.app(), "Football", "mens").await;
    let game = body_json(
        post_json(
            test.app(),
            "/api/games",
            json!({ "home_team": "Owls", "away_team": "Hawks", "sport": "Football", "date": "2024-09-07" }),
        )
        .await,
    )
    .await;
    let story = body_json(
        post_json(
            test.app(),
            "/api/stories",
            json!({
                "title": "Owls win", "article": "Final drive.",
                "sport_id": sport["id"], "game_id": game["id"]
            }),
        )
        .await,
    )
    .await;

    let uri = format!("/api/pages/stories/{}", story["id"]);
    let page = body_json(get(test.app(), &uri).await).await;
    assert_eq!(page["title"], "Owls win");
    assert_eq!(page["sport"], json!({ "name": "Football", "slug": "football" }));
    assert_eq!(page["game"]["away_team"], "Hawks");
    assert_eq!(page["game"]["date"], "2024-09-07");

    let missing = get(test.app(), "/api/pages/stories/999999").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
