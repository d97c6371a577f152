//! Credential verification.
//!
//! - [`password`] -- Argon2id hashing and verification.
//! - [`verifier`] -- The [`CredentialVerifier`] seam and its implementations.

pub mod password;
pub mod verifier;

pub use verifier::{Account, AccountDirectory, CredentialVerifier, DemoVerifier};

use crate::error::CoreError;

/// Failure reported by a [`CredentialVerifier`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately does not say which.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The credential store itself failed (bad hash, unreadable record).
    #[error("Credential backend error: {0}")]
    Backend(String),
}

impl From<AuthError> for CoreError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => CoreError::InvalidCredentials,
            AuthError::Backend(msg) => CoreError::Storage(msg),
        }
    }
}
