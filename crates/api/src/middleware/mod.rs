//! Session extractors.
//!
//! - [`session::CurrentUser`] -- The signed-in identity; 401 without a session.

pub mod session;
