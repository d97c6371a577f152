//! Route definitions for admin navigation.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET /menu              -> menu
/// GET /route             -> check_route
/// GET /pages             -> dashboard
/// GET /pages/{*section}  -> page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/menu", get(admin::menu))
        .route("/route", get(admin::check_route))
        .route("/pages", get(admin::dashboard))
        .route("/pages/{*section}", get(admin::page))
}
