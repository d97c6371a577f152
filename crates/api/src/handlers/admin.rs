//! Handlers for admin navigation: the filtered sidebar, route checks and
//! guarded page lookups.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use vivanz_core::guard::RouteDecision;
use vivanz_core::menu::{visible_entries, MenuEntry, ADMIN_MENU};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct RouteCheck {
    pub path: String,
    pub decision: RouteDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<&'static str>,
}

/// GET /api/v1/admin/menu
///
/// Sidebar entries visible to the current role. Empty when logged out.
pub async fn menu(State(state): State<AppState>) -> Json<DataResponse<Vec<&'static MenuEntry>>> {
    let role = state.session.read().await.current_role();
    Json(DataResponse {
        data: visible_entries(ADMIN_MENU, role),
    })
}

/// GET /api/v1/admin/route?path=/admin/rooms
///
/// What the front-end router should do when entering `path`.
pub async fn check_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Json<DataResponse<RouteCheck>> {
    let role = state.session.read().await.current_role();
    let decision = state.guard.check(&query.path, role);

    if decision != RouteDecision::Allow {
        tracing::debug!(path = %query.path, ?decision, "Route refused");
    }

    Json(DataResponse {
        data: RouteCheck {
            path: query.path,
            decision,
            redirect_to: decision.redirect_to(),
        },
    })
}

/// GET /api/v1/admin/pages
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DataResponse<MenuEntry>>> {
    open_page(&state, "/admin").await
}

/// GET /api/v1/admin/pages/{*section}
///
/// 401 without a session, 403 when the role may not open the section.
pub async fn page(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> AppResult<Json<DataResponse<MenuEntry>>> {
    open_page(&state, &format!("/admin/{section}")).await
}

async fn open_page(state: &AppState, path: &str) -> AppResult<Json<DataResponse<MenuEntry>>> {
    let role = state.session.read().await.current_role();
    let page = state.guard.authorize(path, role)?;
    Ok(Json(DataResponse { data: *page }))
}
