pub mod admin;
pub mod auth;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                POST   login
/// /auth/logout               POST   logout
/// /auth/me                   GET    current identity
///
/// /admin/menu                GET    sidebar entries for the current role
/// /admin/route?path=         GET    route-entry decision
/// /admin/pages               GET    dashboard (guarded)
/// /admin/pages/{section}     GET    admin section (guarded)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
