use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    authenticated: bool,
    guard_mode: &'static str,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let authenticated = state.session.read().await.is_authenticated();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        authenticated,
        guard_mode: state.guard.mode().as_str(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
