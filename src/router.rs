//! Route table mapping paths to views.
//!
//! The application has a single route, `/`, named `home`. History is
//! path-based under a configurable base path; there is no hash mode and no
//! catch-all, so any other path resolves to nothing.

use std::env;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Environment variable holding the base path the app is served under.
pub const BASE_URL_ENV: &str = "ROSTER_BASE_URL";

/// Views a route can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// The profile table.
    Home,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => f.write_str("HomeView"),
        }
    }
}

/// A single path-to-view mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// How locations map onto routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum History {
    /// Standard URL-path history rooted at `base`.
    Path { base: String },
}

impl History {
    /// Path history under `base`, normalized to start and end with `/`.
    pub fn path(base: &str) -> Self {
        let trimmed = base.trim().trim_matches('/');
        let base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        History::Path { base }
    }

    /// The base path.
    pub fn base(&self) -> &str {
        match self {
            History::Path { base } => base,
        }
    }

    /// Strip the base from a location, returning the app-relative path.
    ///
    /// Returns `None` if the location is outside the base.
    fn app_path(&self, location: &str) -> Option<String> {
        let base = self.base();
        let location = location.split(['?', '#']).next().unwrap_or_default();

        if base == "/" {
            return Some(location.to_string());
        }

        let bare = base.trim_end_matches('/');
        if location == bare {
            return Some("/".to_string());
        }
        location
            .strip_prefix(bare)
            .filter(|rest| rest.starts_with('/'))
            .map(str::to_string)
    }
}

/// The static route table.
#[derive(Debug, Clone, Serialize)]
pub struct RouteTable {
    history: History,
    routes: Vec<Route>,
}

static ROUTES: Lazy<RouteTable> = Lazy::new(|| {
    let base = env::var(BASE_URL_ENV).unwrap_or_else(|_| "/".to_string());
    RouteTable::new(History::path(&base))
});

/// The process-wide route table, built on first use.
pub fn routes() -> &'static RouteTable {
    &ROUTES
}

impl RouteTable {
    /// Build the application's route table with the given history.
    pub fn new(history: History) -> Self {
        Self {
            history,
            routes: vec![Route {
                path: "/",
                name: "home",
                view: View::Home,
            }],
        }
    }

    /// The history mode.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// All routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the route for a location. Query strings and fragments are
    /// ignored; unmatched paths return `None`.
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let path = self.history.app_path(location)?;
        let route = self.routes.iter().find(|r| r.path == path);
        tracing::debug!(location, matched = ?route.map(|r| r.name), "resolve route");
        route
    }

    /// Find a route by its logical name.
    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }
}
