//! Navigation guard: pure decision functions over session state and path.
//!
//! DESIGN
//! ======
//! `decide` is the global gate applied to every navigation; `decide_route`
//! layers the per-route guard classes on top of an `Allow`. Both are total
//! functions with no side effects; `components::auth_gate` and
//! `components::route_guard` turn their decisions into placeholder
//! rendering or redirects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::table::{GuardClass, resolve};
use crate::state::session::SessionState;

/// The public login view.
pub const LOGIN_PATH: &str = "/login";
/// The non-privileged default route.
pub const HOME_PATH: &str = "/";

/// Outcome of evaluating guards for one requested path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Bootstrap window: render the loading placeholder, never redirect.
    Loading,
    /// Render the requested view.
    Allow,
    /// Navigate elsewhere; `from` carries the originally requested path so
    /// the login flow can offer a way back.
    Redirect {
        to: String,
        from: Option<String>,
    },
}

impl NavigationDecision {
    fn login_redirect(requested_path: &str) -> Self {
        Self::Redirect {
            to: LOGIN_PATH.to_owned(),
            from: Some(requested_path.to_owned()),
        }
    }

    fn home_redirect() -> Self {
        Self::Redirect {
            to: HOME_PATH.to_owned(),
            from: None,
        }
    }
}

/// Global gate, evaluated on every render for every path.
///
/// Ordered policy: loading placeholder while the session is unresolved;
/// unauthenticated users may only reach the login view; authenticated
/// users are moved off the login view; everything else renders.
pub fn decide(state: &SessionState, requested_path: &str) -> NavigationDecision {
    match state {
        SessionState::Loading => NavigationDecision::Loading,
        SessionState::Unauthenticated if requested_path != LOGIN_PATH => {
            NavigationDecision::login_redirect(requested_path)
        }
        SessionState::Authenticated(_) if requested_path == LOGIN_PATH => {
            NavigationDecision::home_redirect()
        }
        _ => NavigationDecision::Allow,
    }
}

/// Per-route guard, applied after the global gate has allowed rendering.
///
/// `Protected` requires any authenticated identity; `AdminOnly` also
/// requires the admin attribute and falls back to the non-privileged
/// default route without it.
pub fn decide_route(guard: GuardClass, state: &SessionState, requested_path: &str) -> NavigationDecision {
    match guard {
        GuardClass::Public => NavigationDecision::Allow,
        GuardClass::Protected => match state {
            SessionState::Loading => NavigationDecision::Loading,
            SessionState::Authenticated(_) => NavigationDecision::Allow,
            SessionState::Unauthenticated => NavigationDecision::login_redirect(requested_path),
        },
        GuardClass::AdminOnly => match state {
            SessionState::Loading => NavigationDecision::Loading,
            SessionState::Authenticated(user) if user.is_admin => NavigationDecision::Allow,
            SessionState::Authenticated(_) => NavigationDecision::home_redirect(),
            SessionState::Unauthenticated => NavigationDecision::login_redirect(requested_path),
        },
    }
}

/// Resolve a path through the route table and apply its guard class.
///
/// Unmatched paths hit the catch-all redirect to `/`, keeping the decision
/// total over arbitrary input.
pub fn decide_for_path(state: &SessionState, requested_path: &str) -> NavigationDecision {
    match resolve(requested_path) {
        Some(matched) => decide_route(matched.spec.guard, state, requested_path),
        None => NavigationDecision::home_redirect(),
    }
}

/// Render a redirect decision as an href, carrying the original path as a
/// `from` query parameter.
pub fn redirect_href(to: &str, from: Option<&str>) -> String {
    match from {
        Some(from) => format!("{to}?from={}", encode_query_component(from)),
        None => to.to_owned(),
    }
}

/// Percent-encode everything outside the URL-unreserved set.
fn encode_query_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
