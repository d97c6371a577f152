//! Extractor for the signed-in identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vivanz_core::error::CoreError;
use vivanz_core::identity::Identity;

use crate::error::AppError;
use crate::state::AppState;

/// The identity currently held by the session store.
///
/// ```ignore
/// async fn my_handler(CurrentUser(user): CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.session.read().await;
        session
            .current()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not logged in".into())))
    }
}
