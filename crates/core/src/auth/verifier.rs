//! Pluggable credential verification.
//!
//! [`SessionStore::login`](crate::session::SessionStore::login) never decides
//! on its own whether credentials are good; it asks a [`CredentialVerifier`].

use serde::{Deserialize, Serialize};

use super::password::{hash_password, verify_password};
use super::AuthError;
use crate::error::CoreError;
use crate::identity::Identity;
use crate::roles::Role;

/// Checks an email/password pair and resolves it to an [`Identity`].
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
}

// ---------------------------------------------------------------------------
// Demo verifier
// ---------------------------------------------------------------------------

/// Accepts any credentials and signs the caller in as a super admin.
///
/// This is how the back-office shipped before a credential store existed.
/// Only use it for local demos.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoVerifier;

impl DemoVerifier {
    pub const USER_ID: &'static str = "1";
    pub const USER_NAME: &'static str = "Admin User";
}

impl CredentialVerifier for DemoVerifier {
    fn verify(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        Ok(Identity::new(
            Self::USER_ID,
            Self::USER_NAME,
            email,
            Role::SuperAdmin,
        ))
    }
}

// ---------------------------------------------------------------------------
// Account directory
// ---------------------------------------------------------------------------

/// A back-office account: the identity plus its Argon2id password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(flatten)]
    pub identity: Identity,
    pub password_hash: String,
}

impl Account {
    /// Build an account by hashing `password`.
    pub fn with_password(identity: Identity, password: &str) -> Result<Self, AuthError> {
        let password_hash =
            hash_password(password).map_err(|e| AuthError::Backend(format!("hashing: {e}")))?;
        Ok(Self {
            identity,
            password_hash,
        })
    }
}

/// In-memory credential store keyed by email (case-insensitive).
#[derive(Debug, Clone)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
    /// Hash checked when the email is unknown, so both rejections cost one Argon2 run.
    decoy_hash: String,
}

impl AccountDirectory {
    /// Build a directory, rejecting duplicate emails.
    pub fn new(accounts: Vec<Account>) -> Result<Self, CoreError> {
        for (i, account) in accounts.iter().enumerate() {
            let email = &account.identity.email;
            if email.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "Account '{}' has an empty email",
                    account.identity.id
                )));
            }
            if accounts[..i]
                .iter()
                .any(|other| other.identity.email.eq_ignore_ascii_case(email))
            {
                return Err(CoreError::Validation(format!(
                    "Duplicate account email '{email}'"
                )));
            }
        }
        let decoy_hash = hash_password("vivanz-decoy")
            .map_err(|e| CoreError::Storage(format!("hashing decoy password: {e}")))?;
        Ok(Self {
            accounts,
            decoy_hash,
        })
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        let email = email.trim();
        self.accounts
            .iter()
            .find(|a| a.identity.email.eq_ignore_ascii_case(email))
    }
}

impl CredentialVerifier for AccountDirectory {
    fn verify(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let Some(account) = self.find_by_email(email) else {
            // Result ignored: only the time spent matters.
            let _ = verify_password(password, &self.decoy_hash);
            tracing::debug!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let valid = verify_password(password, &account.password_hash).map_err(|e| {
            AuthError::Backend(format!(
                "unusable password hash for account {}: {e}",
                account.identity.id
            ))
        })?;

        if !valid {
            tracing::debug!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(account.identity.clone())
    }
}
