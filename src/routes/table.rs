//! Static route table: path pattern → (view, guard class).
//!
//! DESIGN
//! ======
//! The table is the single source of truth for the navigation surface: the
//! router declaration in `app`, the per-route guards, and the nav chrome
//! all derive from it. Patterns are literal or single-parameter segments
//! (`/video/:id`), first match wins, and unmatched paths fall through to
//! the caller's catch-all redirect.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::state::session::SessionState;

/// Access classification of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardClass {
    /// Reachable without a session.
    Public,
    /// Requires any authenticated identity.
    Protected,
    /// Requires an authenticated identity with the admin attribute.
    AdminOnly,
}

/// Named application views the table maps paths onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageView {
    Login,
    Home,
    Chat,
    Leaderboard,
    Video,
    Profile,
    Settings,
    Admin,
}

impl PageView {
    /// Label shown in the nav chrome, for views that appear there.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("Home"),
            Self::Chat => Some("Chat"),
            Self::Leaderboard => Some("Leaderboard"),
            Self::Settings => Some("Settings"),
            Self::Admin => Some("Admin"),
            Self::Login | Self::Video | Self::Profile => None,
        }
    }
}

/// One route-table entry, immutable for the process lifetime.
#[derive(Debug)]
pub struct RouteSpec {
    /// Path pattern: literal segments plus `:name` parameters.
    pub pattern: &'static str,
    /// Access classification applied by `routes::guard`.
    pub guard: GuardClass,
    /// View rendered when the guards allow.
    pub view: PageView,
}

/// The full navigation surface, in match order.
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec { pattern: "/login", guard: GuardClass::Public, view: PageView::Login },
    RouteSpec { pattern: "/", guard: GuardClass::Protected, view: PageView::Home },
    RouteSpec { pattern: "/chat", guard: GuardClass::Protected, view: PageView::Chat },
    RouteSpec { pattern: "/leaderboard", guard: GuardClass::Protected, view: PageView::Leaderboard },
    RouteSpec { pattern: "/video/:id", guard: GuardClass::Protected, view: PageView::Video },
    RouteSpec { pattern: "/profile/:username", guard: GuardClass::Protected, view: PageView::Profile },
    RouteSpec { pattern: "/settings", guard: GuardClass::Protected, view: PageView::Settings },
    RouteSpec { pattern: "/admin", guard: GuardClass::AdminOnly, view: PageView::Admin },
];

/// A resolved route with its bound path parameters.
#[derive(Debug)]
pub struct RouteMatch {
    pub spec: &'static RouteSpec,
    pub params: Vec<(&'static str, String)>,
}

/// Resolve a requested path to the first matching table entry.
///
/// `None` means no entry matched; the caller redirects to `/` so path
/// resolution stays total.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    ROUTES.iter().find_map(|spec| {
        match_pattern(spec.pattern, path).map(|params| RouteMatch { spec, params })
    })
}

/// Match one pattern against a concrete path, binding `:name` segments.
///
/// Comparison is case-sensitive; the query string and a trailing slash are
/// ignored; parameter segments never bind the empty string.
fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let path = path.split('?').next().unwrap_or_default();
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };

    let mut pattern_segments = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());
    let mut params = Vec::new();

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    params.push((name, actual.to_owned()));
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

/// Nav-chrome entries derived from the table: literal protected routes,
/// plus the admin console for admins. Empty until authenticated.
pub fn nav_entries(state: &SessionState) -> Vec<(&'static str, &'static str)> {
    if !state.is_authenticated() {
        return Vec::new();
    }
    ROUTES
        .iter()
        .filter(|spec| !spec.pattern.contains(':'))
        .filter(|spec| match spec.guard {
            GuardClass::Public => false,
            GuardClass::Protected => true,
            GuardClass::AdminOnly => state.is_admin(),
        })
        .filter_map(|spec| spec.view.nav_label().map(|label| (spec.pattern, label)))
        .collect()
}
