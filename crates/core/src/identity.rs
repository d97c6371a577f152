//! The authenticated actor stored in the session slot.

use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::types::{IdentityId, Timestamp};

/// Profile of the signed-in back-office user.
///
/// Serialized with camelCase keys; this is the exact layout kept in the
/// durable session slot, so renaming a field invalidates stored sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: IdentityId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: Timestamp,
    /// Id of the account that created this one, when created from the admin UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentityId>,
    /// Informational only; login does not check it.
    pub is_active: bool,
}

impl Identity {
    /// Build an active identity created now.
    pub fn new(
        id: impl Into<IdentityId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            phone: None,
            created_at: chrono::Utc::now(),
            created_by: None,
            is_active: true,
        }
    }

    /// First letter of the name, upper-cased, for the sidebar avatar.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let identity = Identity::new("1", "Admin User", "a@x.com", Role::SuperAdmin);
        let json = serde_json::to_value(&identity).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["role"], "SUPER_ADMIN");
        assert_eq!(json["isActive"], true);
        assert!(json["createdAt"].is_string());
        assert!(json.get("phone").is_none());
        assert!(json.get("createdBy").is_none());
    }

    #[test]
    fn parses_record_written_by_the_front_end() {
        let raw = r#"{
            "id": "1",
            "name": "Admin User",
            "email": "admin@vivanzpalace.com",
            "role": "SUPER_ADMIN",
            "createdAt": "2024-01-15T00:00:00.000Z",
            "isActive": true
        }"#;

        let identity: Identity = serde_json::from_str(raw).unwrap();
        assert_eq!(identity.role, Role::SuperAdmin);
        assert_eq!(identity.phone, None);
        assert_eq!(identity.created_at.to_rfc3339(), "2024-01-15T00:00:00+00:00");
    }

    #[test]
    fn initial_is_upper_case() {
        let identity = Identity::new("2", "jane", "j@x.com", Role::Receptionist);
        assert_eq!(identity.initial(), Some('J'));
    }
}
