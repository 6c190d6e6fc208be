//! Every id-addressed endpoint rejects malformed identifiers with 400 before
//! storage is consulted.
//!
//! The app under test is built over gateways that panic on any call; a panic
//! would surface as 500, so a 400 proves the gateway was never invoked.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_app_with, delete, get, put_json, unreachable_gateways};
use serde_json::json;

const BAD_IDS: &[&str] = &[
    "123",
    "not-a-uuid",
    "0f8fad5bd9cb469fa16570867728950e",
    "zf8fad5b-d9cb-469f-a165-70867728950e",
    "0f8fad5b-d9cb-469f-a165-70867728950e0",
];

fn valid_body(resource: &str) -> serde_json::Value {
    match resource {
        "track" => json!({"name": "A", "duration": 1}),
        "artist" => json!({"name": "A", "grammy": false}),
        "album" => json!({"name": "A", "year": 2000}),
        "user" => json!({"oldPassword": "a", "newPassword": "b"}),
        other => panic!("unknown resource {other}"),
    }
}

#[tokio::test]
async fn malformed_ids_return_400_without_touching_storage() {
    let app = build_app_with(unreachable_gateways());

    for resource in ["track", "artist", "album", "user"] {
        for id in BAD_IDS {
            let uri = format!("/{resource}/{id}");

            let response = get(&app, &uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "GET {uri}");
            assert_eq!(body_json(response).await["error"], "Invalid UUID");

            let response = put_json(&app, &uri, valid_body(resource)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "PUT {uri}");

            let response = delete(&app, &uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "DELETE {uri}");
        }
    }
}

#[tokio::test]
async fn malformed_id_wins_over_malformed_body() {
    let app = build_app_with(unreachable_gateways());
    let response = put_json(&app, "/track/nope", json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid UUID");
}

#[tokio::test]
async fn unreachable_gateway_panics_become_500() {
    let app = build_app_with(unreachable_gateways());
    let response = get(&app, "/track").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
