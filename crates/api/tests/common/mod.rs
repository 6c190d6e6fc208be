#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use musiclib_api::config::{LogFormat, ServerConfig};
use musiclib_api::router::build_app_router;
use musiclib_api::state::AppState;
use musiclib_core::types::EntityId;
use musiclib_db::gateway::{
    CatalogGateway, CatalogRecord, GatewayResult, Gateways, Storage, UserGateway,
};
use musiclib_db::models::user::{NewUser, PasswordChange, User};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        database_url: None,
        database_max_connections: 1,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over fresh in-memory storage.
///
/// The returned router keeps its state across clones, so one test can issue
/// a sequence of requests against the same data.
pub fn build_test_app() -> Router {
    build_app_with(Gateways::in_memory())
}

/// Build the full application router over the given gateways.
pub fn build_app_with(gateways: Gateways) -> Router {
    build_app_router(AppState::new(test_config(), gateways))
}

// ---------------------------------------------------------------------------
// Unreachable storage
// ---------------------------------------------------------------------------

/// A gateway that panics on every call.
///
/// The panic layer turns a panic into a 500, so any test that receives a 4xx
/// from an app built over this gateway proves storage was never touched.
pub struct Unreachable;

#[async_trait]
impl<R: CatalogRecord> CatalogGateway<R> for Unreachable {
    async fn list(&self) -> GatewayResult<Vec<R>> {
        panic!("gateway must not be called");
    }

    async fn find_by_id(&self, _id: EntityId) -> GatewayResult<Option<R>> {
        panic!("gateway must not be called");
    }

    async fn create(&self, _input: &R::Input) -> GatewayResult<R> {
        panic!("gateway must not be called");
    }

    async fn replace(&self, _id: EntityId, _input: &R::Input) -> GatewayResult<Option<R>> {
        panic!("gateway must not be called");
    }

    async fn delete(&self, _id: EntityId) -> GatewayResult<bool> {
        panic!("gateway must not be called");
    }
}

#[async_trait]
impl UserGateway for Unreachable {
    async fn list(&self) -> GatewayResult<Vec<User>> {
        panic!("gateway must not be called");
    }

    async fn find_by_id(&self, _id: EntityId) -> GatewayResult<Option<User>> {
        panic!("gateway must not be called");
    }

    async fn create(&self, _input: &NewUser) -> GatewayResult<User> {
        panic!("gateway must not be called");
    }

    async fn change_password(
        &self,
        _id: EntityId,
        _change: &PasswordChange,
    ) -> GatewayResult<Option<User>> {
        panic!("gateway must not be called");
    }

    async fn delete(&self, _id: EntityId) -> GatewayResult<bool> {
        panic!("gateway must not be called");
    }
}

/// Gateways for every entity family that panic when used.
pub fn unreachable_gateways() -> Gateways {
    Gateways {
        tracks: Arc::new(Unreachable),
        artists: Arc::new(Unreachable),
        albums: Arc::new(Unreachable),
        users: Arc::new(Unreachable),
        storage: Storage::Memory,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: &Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Create a resource and return its assigned id, asserting 201.
pub async fn create_id(app: &Router, uri: &str, body: serde_json::Value) -> String {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}
