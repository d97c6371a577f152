use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vivanz_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds a catch-all internal variant.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vivanz_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure outside the domain, e.g. a blocking task that panicked.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    "INVALID_CREDENTIALS",
                    core.to_string(),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::UnauthorizedRoute { path } => (
                    StatusCode::FORBIDDEN,
                    "FORBIDDEN_ROUTE",
                    format!("Your role may not open {path}"),
                ),
                CoreError::NotFound(what) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", format!("{what} not found"))
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::CorruptSessionData(msg) | CoreError::Storage(msg) => {
                    tracing::error!(error = %msg, "Session storage error");
                    internal()
                }
            },

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
