//! Loading the back-office account directory from a JSON file.
//!
//! The file is an array of account records:
//!
//! ```json
//! [
//!   {
//!     "id": "1",
//!     "name": "John Doe",
//!     "email": "reception@vivanzpalace.com",
//!     "role": "RECEPTIONIST",
//!     "phone": "+91 9876543210",
//!     "createdAt": "2024-01-15T00:00:00Z",
//!     "isActive": true,
//!     "passwordHash": "$argon2id$v=19$..."
//!   }
//! ]
//! ```

use std::fs;
use std::path::Path;

use vivanz_core::auth::{Account, AccountDirectory};

use crate::error::StoreError;

pub fn load_accounts(path: impl AsRef<Path>) -> Result<AccountDirectory, StoreError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let accounts: Vec<Account> = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let directory = AccountDirectory::new(accounts)?;
    if directory.is_empty() {
        tracing::warn!(path = %path.display(), "Account directory is empty; nobody can log in");
    }
    tracing::info!(
        path = %path.display(),
        accounts = directory.len(),
        "Loaded account directory"
    );
    Ok(directory)
}
