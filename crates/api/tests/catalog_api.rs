//! HTTP-level integration tests for the `/artist` and `/album` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_id, delete, get, post_json, put_json};
use serde_json::json;

const MISSING_ID: &str = "a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11";

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn artist_crud_flow() {
    let app = build_test_app();
    let id = create_id(&app, "/artist", json!({"name": "Nina", "grammy": false})).await;

    let response = put_json(
        &app,
        &format!("/artist/{id}"),
        json!({"name": "Nina Simone", "grammy": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Nina Simone");
    assert_eq!(json["grammy"], true);

    let list = body_json(get(&app, "/artist").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    assert_eq!(
        delete(&app, &format!("/artist/{id}")).await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        get(&app, &format!("/artist/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn artist_requires_grammy_flag() {
    let app = build_test_app();
    let response = post_json(&app, "/artist", json!({"name": "Nina"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "grammy is required");
}

#[tokio::test]
async fn artist_unknown_id_returns_404() {
    let app = build_test_app();
    let response = get(&app, &format!("/artist/{MISSING_ID}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Artist with id {MISSING_ID} not found")
    );
}

// ---------------------------------------------------------------------------
// Albums
// ---------------------------------------------------------------------------

#[tokio::test]
async fn album_create_and_get() {
    let app = build_test_app();
    let artist_id = create_id(&app, "/artist", json!({"name": "Nina", "grammy": true})).await;

    let response = post_json(
        &app,
        "/album",
        json!({"name": "Pastel Blues", "year": 1965, "artistId": artist_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();

    let fetched = body_json(get(&app, &format!("/album/{id}")).await).await;
    assert_eq!(fetched["name"], "Pastel Blues");
    assert_eq!(fetched["year"], 1965);
    assert_eq!(fetched["artistId"], artist_id);
}

#[tokio::test]
async fn album_requires_year() {
    let app = build_test_app();
    let response = post_json(&app, "/album", json!({"name": "Untitled"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn album_put_unknown_id_returns_404() {
    let app = build_test_app();
    let response = put_json(
        &app,
        &format!("/album/{MISSING_ID}"),
        json!({"name": "X", "year": 2000}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn album_second_delete_returns_404() {
    let app = build_test_app();
    let id = create_id(&app, "/album", json!({"name": "X", "year": 2000})).await;

    assert_eq!(
        delete(&app, &format!("/album/{id}")).await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        delete(&app, &format!("/album/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}
