//! Durable storage for the back-office: the session slot and the account file.

pub mod accounts;
pub mod error;
pub mod file_slot;

pub use accounts::load_accounts;
pub use error::StoreError;
pub use file_slot::FileSlot;
