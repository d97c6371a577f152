//! Route-entry guard for admin pages.
//!
//! The sidebar only hides links; this guard decides whether a page may
//! actually be rendered. Admin pages require the same roles as their menu
//! entry. In [`GuardMode::MenuOnly`] every page renders (the original
//! behaviour) and each access that enforcement would refuse is logged.

use serde::Serialize;

use crate::error::CoreError;
use crate::menu::{find_entry, normalize_path, MenuEntry, ADMIN_MENU};
use crate::roles::Role;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Pages anyone may render.
pub const PUBLIC_PATHS: &[&str] = &[
    "/", "/about", "/rooms", "/booking", "/dining", "/events", LOGIN_PATH,
];

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardMode {
    /// Refuse pages the current role may not see.
    #[default]
    Enforce,
    /// Render every admin page; only the menu is filtered.
    MenuOnly,
}

impl GuardMode {
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "enforce" => Ok(Self::Enforce),
            "menu-only" => Ok(Self::MenuOnly),
            other => Err(CoreError::Validation(format!(
                "Unknown route guard mode '{other}'. Must be one of: enforce, menu-only"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enforce => "enforce",
            Self::MenuOnly => "menu-only",
        }
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Outcome of entering a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    Allow,
    /// No session: send the visitor to [`LOGIN_PATH`].
    Redirect,
    /// Signed in, but the role may not see this page.
    Forbidden,
    NotFound,
}

impl RouteDecision {
    pub fn redirect_to(self) -> Option<&'static str> {
        match self {
            Self::Redirect => Some(LOGIN_PATH),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Guard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct RouteGuard {
    mode: GuardMode,
    pages: &'static [MenuEntry],
}

impl RouteGuard {
    /// Guard over the admin pages listed in [`ADMIN_MENU`].
    pub fn new(mode: GuardMode) -> Self {
        Self {
            mode,
            pages: ADMIN_MENU,
        }
    }

    pub fn mode(&self) -> GuardMode {
        self.mode
    }

    /// Decide whether `path` may be rendered for `role`.
    pub fn check(&self, path: &str, role: Option<Role>) -> RouteDecision {
        let normalized = normalize_path(path);
        if PUBLIC_PATHS.contains(&normalized) {
            return RouteDecision::Allow;
        }
        match find_entry(self.pages, normalized) {
            Some(page) => self.decide(page, role),
            None => RouteDecision::NotFound,
        }
    }

    /// Resolve an admin page, or fail the way a handler should respond.
    pub fn authorize(&self, path: &str, role: Option<Role>) -> Result<&'static MenuEntry, CoreError> {
        let page = find_entry(self.pages, path)
            .ok_or_else(|| CoreError::NotFound(format!("admin page {path}")))?;

        match self.decide(page, role) {
            RouteDecision::Allow => Ok(page),
            RouteDecision::Redirect => Err(CoreError::Unauthorized("Login required".into())),
            RouteDecision::Forbidden => Err(CoreError::UnauthorizedRoute {
                path: page.path.to_string(),
            }),
            RouteDecision::NotFound => Err(CoreError::NotFound(format!("admin page {path}"))),
        }
    }

    fn decide(&self, page: &MenuEntry, role: Option<Role>) -> RouteDecision {
        if page.is_visible_to(role) {
            return RouteDecision::Allow;
        }

        let refused = match role {
            None => RouteDecision::Redirect,
            Some(_) => RouteDecision::Forbidden,
        };

        match self.mode {
            GuardMode::Enforce => refused,
            GuardMode::MenuOnly => {
                tracing::warn!(
                    path = page.path,
                    role = role.map(Role::as_str).unwrap_or("none"),
                    would_be = ?refused,
                    "Rendering admin page outside the caller's menu"
                );
                RouteDecision::Allow
            }
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(GuardMode::default())
    }
}
