//! The session store: who is signed in to this back-office instance.
//!
//! Lifecycle: construct with [`SessionStore::new`], call
//! [`restore`](SessionStore::restore) once at boot, then mutate only through
//! [`login`](SessionStore::login) (or its two halves, `verifier` then
//! [`complete_login`](SessionStore::complete_login)) and
//! [`logout`](SessionStore::logout). Those are the only writers of the durable
//! slot; `restore` is its only reader.
//!
//! There is no expiry: a restored session stays valid until logout.

use std::sync::{Arc, Mutex};

use crate::auth::CredentialVerifier;
use crate::error::CoreError;
use crate::identity::Identity;
use crate::roles::{role_matches, Role};

/// Key of the durable slot holding the serialized [`Identity`].
pub const SESSION_KEY: &str = "user";

// ---------------------------------------------------------------------------
// Durable slot
// ---------------------------------------------------------------------------

/// A single durable key-value entry holding the serialized session.
///
/// Absence of a value means "logged out". `clear` on an empty slot succeeds.
pub trait SessionSlot: Send + Sync {
    fn read(&self) -> Result<Option<String>, CoreError>;
    fn write(&self, value: &str) -> Result<(), CoreError>;
    fn clear(&self) -> Result<(), CoreError>;
}

/// Process-memory slot. Survives a [`SessionStore`] being rebuilt, not a restart.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with raw content, e.g. to simulate a stale session.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, CoreError> {
        self.value
            .lock()
            .map_err(|_| CoreError::Storage("memory slot lock poisoned".into()))
    }
}

impl SessionSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, CoreError> {
        Ok(self.lock()?.clone())
    }

    fn write(&self, value: &str) -> Result<(), CoreError> {
        *self.lock()? = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        *self.lock()? = None;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Session store
// ---------------------------------------------------------------------------

/// Single source of truth for the signed-in identity.
pub struct SessionStore {
    slot: Arc<dyn SessionSlot>,
    verifier: Arc<dyn CredentialVerifier>,
    current: Option<Identity>,
}

impl SessionStore {
    /// Create an empty (logged-out) store. Call [`restore`](Self::restore) next.
    pub fn new(slot: Arc<dyn SessionSlot>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            slot,
            verifier,
            current: None,
        }
    }

    /// Load the session persisted by a previous login, if any.
    ///
    /// Unreadable or malformed slot content is treated as "no session": the
    /// slot is cleared and the problem is only logged.
    pub fn restore(&mut self) -> Option<&Identity> {
        self.current = match self.slot.read() {
            Ok(Some(raw)) => match parse_session(&raw) {
                Ok(identity) => {
                    tracing::info!(
                        user_id = %identity.id,
                        role = %identity.role,
                        "Restored session"
                    );
                    Some(identity)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Discarding stored session");
                    if let Err(clear_err) = self.slot.clear() {
                        tracing::warn!(error = %clear_err, "Failed to clear corrupt session slot");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "Session slot unreadable, starting logged out");
                None
            }
        };
        self.current.as_ref()
    }

    /// Verify credentials, persist the resulting identity and make it current.
    ///
    /// On any error the current session and the slot are left untouched. A
    /// successful login replaces whoever was signed in before.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity, CoreError> {
        let email = check_credentials(email, password)?;
        let identity = self.verifier.verify(email, password)?;
        self.complete_login(identity)
    }

    /// The verifier [`login`](Self::login) consults.
    ///
    /// Callers that must not hold the store while a slow hash runs verify with
    /// this first, then hand the result to [`complete_login`](Self::complete_login).
    pub fn verifier(&self) -> Arc<dyn CredentialVerifier> {
        Arc::clone(&self.verifier)
    }

    /// Second half of [`login`](Self::login): persist an identity the verifier
    /// has already accepted and make it current.
    pub fn complete_login(&mut self, identity: Identity) -> Result<Identity, CoreError> {
        let raw = serde_json::to_string(&identity)
            .map_err(|e| CoreError::Storage(format!("serialize session: {e}")))?;
        self.slot.write(&raw)?;

        tracing::info!(user_id = %identity.id, role = %identity.role, "Logged in");
        self.current = Some(identity.clone());
        Ok(identity)
    }

    /// Sign out and forget the persisted session. Calling it while logged out is a no-op.
    ///
    /// The slot is cleared first; if that fails the session stays current, so
    /// memory never disagrees with what the next `restore` would load.
    pub fn logout(&mut self) -> Result<(), CoreError> {
        self.slot.clear()?;
        if let Some(identity) = self.current.take() {
            tracing::info!(user_id = %identity.id, "Logged out");
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// True iff someone is signed in and their role is in `roles`.
    pub fn has_role(&self, roles: &[Role]) -> bool {
        role_matches(self.current_role(), roles)
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current.as_ref().map(|identity| identity.role)
    }
}

/// Reject blank credentials before any verifier sees them. Returns the trimmed email.
pub fn check_credentials<'a>(email: &'a str, password: &str) -> Result<&'a str, CoreError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "Email and password are required".into(),
        ));
    }
    Ok(email)
}

fn parse_session(raw: &str) -> Result<Identity, CoreError> {
    serde_json::from_str(raw).map_err(|e| CoreError::CorruptSessionData(e.to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::auth::{Account, AccountDirectory, DemoVerifier};

    /// Slot whose `clear` always fails, as on a read-only disk.
    struct StuckSlot {
        inner: MemorySlot,
    }

    impl SessionSlot for StuckSlot {
        fn read(&self) -> Result<Option<String>, CoreError> {
            self.inner.read()
        }

        fn write(&self, value: &str) -> Result<(), CoreError> {
            self.inner.write(value)
        }

        fn clear(&self) -> Result<(), CoreError> {
            Err(CoreError::Storage("read-only file system".into()))
        }
    }

    fn demo_store(slot: Arc<MemorySlot>) -> SessionStore {
        SessionStore::new(slot, Arc::new(DemoVerifier))
    }

    #[test]
    fn starts_logged_out() {
        let store = demo_store(Arc::new(MemorySlot::new()));
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
    }

    #[test]
    fn login_as_super_admin_scenario() {
        let mut store = demo_store(Arc::new(MemorySlot::new()));

        let identity = store.login("a@x.com", "pw").unwrap();

        assert_eq!(identity.role, Role::SuperAdmin);
        assert_eq!(store.current_role(), Some(Role::SuperAdmin));
        assert!(!store.has_role(&[Role::Receptionist]));
        assert!(store.has_role(&[Role::SuperAdmin]));
    }

    #[test]
    fn no_session_has_no_role() {
        let store = demo_store(Arc::new(MemorySlot::new()));
        assert!(!store.has_role(&[
            Role::SuperAdmin,
            Role::Receptionist,
            Role::RestaurantAdmin
        ]));
    }

    #[test]
    fn empty_role_set_never_matches() {
        let mut store = demo_store(Arc::new(MemorySlot::new()));
        assert!(!store.has_role(&[]));
        store.login("a@x.com", "pw").unwrap();
        assert!(!store.has_role(&[]));
    }

    #[test]
    fn login_persists_to_slot() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = demo_store(slot.clone());

        store.login("a@x.com", "pw").unwrap();

        let raw = slot.read().unwrap().expect("slot should hold the session");
        let stored: Identity = serde_json::from_str(&raw).unwrap();
        assert_eq!(&stored, store.current().unwrap());
    }

    #[test]
    fn login_then_logout_clears_everything() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = demo_store(slot.clone());

        store.login("a@x.com", "pw").unwrap();
        store.logout().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn logout_twice_is_a_no_op() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = demo_store(slot.clone());
        store.login("a@x.com", "pw").unwrap();

        store.logout().unwrap();
        store.logout().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn restore_after_login_yields_identical_identity() {
        let slot = Arc::new(MemorySlot::new());
        let mut first = demo_store(slot.clone());
        let identity = first.login("a@x.com", "pw").unwrap();

        let mut second = demo_store(slot);
        let restored = second.restore().cloned();

        assert!(second.is_authenticated());
        assert_eq!(restored, Some(identity));
    }

    #[test]
    fn restore_with_empty_slot_stays_logged_out() {
        let mut store = demo_store(Arc::new(MemorySlot::new()));
        assert!(store.restore().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn corrupt_slot_is_discarded_on_restore() {
        let slot = Arc::new(MemorySlot::with_value("{not json"));
        let mut store = demo_store(slot.clone());

        assert!(store.restore().is_none());
        assert!(!store.is_authenticated());
        assert_eq!(slot.read().unwrap(), None, "corrupt data should be cleared");
    }

    #[test]
    fn unknown_role_in_slot_is_treated_as_corrupt() {
        let raw = r#"{"id":"1","name":"X","email":"x@x.com","role":"OWNER",
                      "createdAt":"2024-01-15T00:00:00Z","isActive":true}"#;
        let slot = Arc::new(MemorySlot::with_value(raw));
        let mut store = demo_store(slot.clone());

        assert!(store.restore().is_none());
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn second_login_overwrites_first() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = demo_store(slot.clone());

        store.login("first@x.com", "pw").unwrap();
        store.login("second@x.com", "pw").unwrap();

        assert_eq!(store.current().unwrap().email, "second@x.com");
        let stored: Identity = serde_json::from_str(&slot.read().unwrap().unwrap()).unwrap();
        assert_eq!(stored.email, "second@x.com");
    }

    #[test]
    fn empty_credentials_are_rejected_without_side_effects() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = demo_store(slot.clone());

        assert_matches!(store.login("", "pw"), Err(CoreError::Validation(_)));
        assert_matches!(store.login("a@x.com", ""), Err(CoreError::Validation(_)));
        assert_matches!(store.login("   ", "pw"), Err(CoreError::Validation(_)));
        assert!(!store.is_authenticated());
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn rejected_login_keeps_existing_session() {
        let account = Account::with_password(
            Identity::new("7", "Jane Smith", "restaurant@x.com", Role::RestaurantAdmin),
            "kitchen",
        )
        .unwrap();
        let directory = AccountDirectory::new(vec![account]).unwrap();
        let slot = Arc::new(MemorySlot::new());
        let mut store = SessionStore::new(slot.clone(), Arc::new(directory));

        store.login("restaurant@x.com", "kitchen").unwrap();
        let before = slot.read().unwrap();

        let result = store.login("restaurant@x.com", "wrong");

        assert_matches!(result, Err(CoreError::InvalidCredentials));
        assert_eq!(store.current_role(), Some(Role::RestaurantAdmin));
        assert_eq!(slot.read().unwrap(), before);
    }

    #[test]
    fn failed_logout_keeps_memory_and_slot_in_agreement() {
        let slot = Arc::new(StuckSlot {
            inner: MemorySlot::new(),
        });
        let mut store = SessionStore::new(slot.clone(), Arc::new(DemoVerifier));
        store.login("a@x.com", "pw").unwrap();

        assert_matches!(store.logout(), Err(CoreError::Storage(_)));
        assert!(store.is_authenticated());
        assert!(slot.read().unwrap().is_some());

        let mut restarted = SessionStore::new(slot, Arc::new(DemoVerifier));
        assert_eq!(restarted.restore().cloned().as_ref(), store.current());
    }

    #[test]
    fn split_login_matches_single_call() {
        let slot = Arc::new(MemorySlot::new());
        let mut store = demo_store(slot.clone());

        let email = check_credentials("  a@x.com ", "pw").unwrap();
        let verified = store.verifier().verify(email, "pw").unwrap();
        let identity = store.complete_login(verified).unwrap();

        assert_eq!(identity.email, "a@x.com");
        assert_eq!(store.current(), Some(&identity));
        let stored: Identity = serde_json::from_str(&slot.read().unwrap().unwrap()).unwrap();
        assert_eq!(stored, identity);
    }
}
