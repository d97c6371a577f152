#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Corrupt session data: {0}")]
    CorruptSessionData(String),

    #[error("Role not permitted for route {path}")]
    UnauthorizedRoute { path: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
