//! Argon2id over PHC strings.
//!
//! Salt and cost parameters are embedded in each stored hash, so accounts
//! hashed under older parameters keep verifying after the defaults change.

use argon2::password_hash::{Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand_core::OsRng;

/// Hash `password` with a fresh OS-random salt.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
}

/// `Ok(false)` for a wrong password. `Err` means `phc` itself is unusable.
pub fn verify_password(password: &str, phc: &str) -> Result<bool, HashError> {
    let stored = PasswordHash::new(phc)?;
    match Argon2::default().verify_password(password.as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(other) => Err(other),
    }
}
