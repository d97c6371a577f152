//! Handlers for the `/auth` resource (login, logout, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;
use vivanz_core::error::CoreError;
use vivanz_core::identity::Identity;
use vivanz_core::session::check_credentials;

use crate::error::{AppError, AppResult};
use crate::middleware::session::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// The signed-in identity plus what the sidebar footer shows for it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(flatten)]
    pub identity: Identity,
    pub role_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<char>,
}

impl From<Identity> for Profile {
    fn from(identity: Identity) -> Self {
        Self {
            role_label: identity.role.label(),
            initial: identity.initial(),
            identity,
        }
    }
}

/// POST /api/v1/auth/login
///
/// Verify the credentials and make the resulting identity the current session.
/// The password check runs on the blocking pool with no lock held; the write
/// lock is taken only to record the result.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<Profile>>> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let email = check_credentials(&input.email, &input.password)?.to_string();

    let verifier = state.session.read().await.verifier();
    let password = input.password;
    let identity = tokio::task::spawn_blocking(move || verifier.verify(&email, &password))
        .await
        .map_err(|e| AppError::InternalError(format!("credential check task failed: {e}")))?
        .map_err(CoreError::from)?;

    let identity = state.session.write().await.complete_login(identity)?;

    Ok(Json(DataResponse {
        data: identity.into(),
    }))
}

/// POST /api/v1/auth/logout
///
/// Clear the session. Succeeds with 204 whether or not anyone was logged in.
pub async fn logout(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.session.write().await.logout()?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<DataResponse<Profile>> {
    Json(DataResponse { data: user.into() })
}
