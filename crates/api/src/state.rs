use std::sync::Arc;

use tokio::sync::RwLock;
use vivanz_core::auth::{CredentialVerifier, DemoVerifier};
use vivanz_core::guard::RouteGuard;
use vivanz_core::session::SessionStore;
use vivanz_store::{load_accounts, FileSlot, StoreError};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The one session of this back-office instance. Login/logout take the
    /// write lock; everything else reads.
    pub session: Arc<RwLock<SessionStore>>,
    /// Page-level access check.
    pub guard: RouteGuard,
}

impl AppState {
    pub fn new(config: ServerConfig, session: SessionStore) -> Self {
        let guard = RouteGuard::new(config.guard_mode);
        Self {
            config: Arc::new(config),
            session: Arc::new(RwLock::new(session)),
            guard,
        }
    }
}

/// Build the session store described by `config` and restore any saved session.
///
/// Uses the account directory when `ACCOUNTS_FILE` is set, the demo verifier
/// otherwise.
pub fn open_session_store(config: &ServerConfig) -> Result<SessionStore, StoreError> {
    let slot = FileSlot::open(&config.session_dir)?;

    let verifier: Arc<dyn CredentialVerifier> = match &config.accounts_file {
        Some(path) => Arc::new(load_accounts(path)?),
        None => {
            tracing::warn!("ACCOUNTS_FILE not set; any credentials will log in as super admin");
            Arc::new(DemoVerifier)
        }
    };

    let mut store = SessionStore::new(Arc::new(slot), verifier);
    if store.restore().is_none() {
        tracing::info!("No saved session; starting logged out");
    }
    Ok(store)
}
