//! Session and role-based access control for the Vivanz back-office.
//!
//! - [`session::SessionStore`] -- who is signed in, persisted to a durable slot.
//! - [`menu`] -- the admin sidebar and its role filter.
//! - [`guard::RouteGuard`] -- page-level enforcement on route entry.
//! - [`auth`] -- pluggable credential verification.

pub mod auth;
pub mod error;
pub mod guard;
pub mod identity;
pub mod menu;
pub mod roles;
pub mod session;
pub mod types;
