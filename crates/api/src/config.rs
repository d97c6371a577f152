use std::path::PathBuf;

use vivanz_core::guard::GuardMode;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the durable session slot.
    pub session_dir: PathBuf,
    /// JSON account directory. `None` selects the demo verifier.
    pub accounts_file: Option<PathBuf>,
    /// Whether admin pages are enforced or only hidden from the menu.
    pub guard_mode: GuardMode,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SESSION_DIR`          | `./data/session`           |
    /// | `ACCOUNTS_FILE`        | unset (demo login)         |
    /// | `ROUTE_GUARD_MODE`     | `enforce`                  |
    ///
    /// # Panics
    ///
    /// Panics on unparseable values; misconfiguration should stop the boot.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_dir = std::env::var("SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data/session"));

        let accounts_file = std::env::var("ACCOUNTS_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let guard_mode = std::env::var("ROUTE_GUARD_MODE")
            .map(|name| GuardMode::from_name(name.trim()).unwrap_or_else(|e| panic!("{e}")))
            .unwrap_or_default();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session_dir,
            accounts_file,
            guard_mode,
        }
    }
}
