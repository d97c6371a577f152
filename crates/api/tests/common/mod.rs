#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use vivanz_api::config::ServerConfig;
use vivanz_api::router::build_app_router;
use vivanz_api::state::AppState;
use vivanz_core::auth::{CredentialVerifier, DemoVerifier};
use vivanz_core::guard::GuardMode;
use vivanz_core::session::{MemorySlot, SessionSlot, SessionStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session_dir: PathBuf::from("unused"),
        accounts_file: None,
        guard_mode: GuardMode::Enforce,
    }
}

/// Build the full application router around an already-restored session store.
pub fn build_app(config: ServerConfig, session: SessionStore) -> Router {
    build_app_router(AppState::new(config, session))
}

/// App with an in-memory slot and the demo verifier (any credentials log in).
pub fn build_test_app() -> Router {
    build_app_with(Arc::new(MemorySlot::new()), Arc::new(DemoVerifier))
}

/// App over the given slot and verifier; the slot is restored first, as at boot.
pub fn build_app_with(
    slot: Arc<dyn SessionSlot>,
    verifier: Arc<dyn CredentialVerifier>,
) -> Router {
    let mut session = SessionStore::new(slot, verifier);
    session.restore();
    build_app(test_config(), session)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in through the API and assert it succeeded.
pub async fn login(app: &Router, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}
