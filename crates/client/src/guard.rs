//! Route guard for the admin area and the navigator it redirects through.

use std::sync::Mutex;

use crate::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PREFIX: &str = "/admin";

/// Moves the UI to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Headless navigator: logs the redirect.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "Navigate");
    }
}

/// Remembers every navigation, most recent last.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|v| v.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn last(&self) -> Option<String> {
        self.visited().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        let mut visited = self
            .visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        visited.push(path.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

/// Whether `path` belongs to the admin area.
pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX
        || path
            .strip_prefix(ADMIN_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Gate admin routes on the presence of a stored token. The token is not
/// checked with the server; the first rejected call logs the user out.
pub fn guard(path: &str, session: &Session) -> RouteDecision {
    if is_admin_path(path) && !session.is_logged_in() {
        RouteDecision::Redirect(LOGIN_PATH)
    } else {
        RouteDecision::Allow
    }
}
