//! Back-office roles and the role-membership predicate.
//!
//! The wire names must match the values the admin front-end stores in the
//! session slot (`"SUPER_ADMIN"`, `"RECEPTIONIST"`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const ROLE_SUPER_ADMIN: &str = "SUPER_ADMIN";
pub const ROLE_RECEPTIONIST: &str = "RECEPTIONIST";
pub const ROLE_RESTAURANT_ADMIN: &str = "RESTAURANT_ADMIN";
pub const ROLE_GUEST: &str = "GUEST";

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Access level of an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Hotel owner.
    SuperAdmin,
    /// Front desk.
    Receptionist,
    /// Restaurant manager.
    RestaurantAdmin,
    /// Hotel guest. No admin page lists this role.
    Guest,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [
        Role::SuperAdmin,
        Role::Receptionist,
        Role::RestaurantAdmin,
        Role::Guest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => ROLE_SUPER_ADMIN,
            Self::Receptionist => ROLE_RECEPTIONIST,
            Self::RestaurantAdmin => ROLE_RESTAURANT_ADMIN,
            Self::Guest => ROLE_GUEST,
        }
    }

    /// Label shown under the user's name in the admin sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super admin",
            Self::Receptionist => "receptionist",
            Self::RestaurantAdmin => "restaurant admin",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True iff `role` is present and is a member of `allowed`.
///
/// An empty `allowed` set matches nothing, with or without a session.
pub fn role_matches(role: Option<Role>, allowed: &[Role]) -> bool {
    role.is_some_and(|r| allowed.contains(&r))
}
