use super::*;

use crate::net::types::User;

fn authed(is_admin: bool) -> SessionState {
    SessionState::Authenticated(User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        avatar_url: None,
        is_admin,
    })
}

// =============================================================
// Global gate — ordered policy
// =============================================================

#[test]
fn loading_renders_placeholder_regardless_of_path() {
    for path in ["/", "/login", "/chat", "/nowhere"] {
        assert_eq!(decide(&SessionState::Loading, path), NavigationDecision::Loading);
    }
}

#[test]
fn unauthenticated_off_login_redirects_with_origin_attached() {
    assert_eq!(
        decide(&SessionState::Unauthenticated, "/chat"),
        NavigationDecision::Redirect {
            to: "/login".to_owned(),
            from: Some("/chat".to_owned()),
        }
    );
}

#[test]
fn unauthenticated_on_login_is_allowed() {
    assert_eq!(decide(&SessionState::Unauthenticated, "/login"), NavigationDecision::Allow);
}

#[test]
fn authenticated_on_login_redirects_home() {
    assert_eq!(
        decide(&authed(false), "/login"),
        NavigationDecision::Redirect {
            to: "/".to_owned(),
            from: None,
        }
    );
}

#[test]
fn authenticated_elsewhere_is_allowed() {
    for path in ["/", "/chat", "/video/abc", "/nowhere"] {
        assert_eq!(decide(&authed(false), path), NavigationDecision::Allow);
    }
}

#[test]
fn decision_is_total_over_state_and_path() {
    let states = [SessionState::Loading, authed(false), SessionState::Unauthenticated];
    let paths = ["/", "/login", "/chat", "/video/abc", "", "/foo/bar?x=1"];
    for state in &states {
        for path in paths {
            // Exactly one of the three decision kinds, never a panic.
            match decide(state, path) {
                NavigationDecision::Loading | NavigationDecision::Allow | NavigationDecision::Redirect { .. } => {}
            }
        }
    }
}

// =============================================================
// Per-route guards
// =============================================================

#[test]
fn protected_route_defers_to_login_redirect() {
    assert_eq!(
        decide_route(GuardClass::Protected, &SessionState::Unauthenticated, "/chat"),
        NavigationDecision::Redirect {
            to: "/login".to_owned(),
            from: Some("/chat".to_owned()),
        }
    );
    assert_eq!(decide_route(GuardClass::Protected, &authed(false), "/chat"), NavigationDecision::Allow);
}

#[test]
fn admin_route_redirects_non_admins_home() {
    assert_eq!(
        decide_route(GuardClass::AdminOnly, &authed(false), "/admin"),
        NavigationDecision::Redirect {
            to: "/".to_owned(),
            from: None,
        }
    );
}

#[test]
fn admin_route_allows_admins() {
    assert_eq!(decide_route(GuardClass::AdminOnly, &authed(true), "/admin"), NavigationDecision::Allow);
}

#[test]
fn public_route_always_allows() {
    assert_eq!(decide_route(GuardClass::Public, &SessionState::Unauthenticated, "/login"), NavigationDecision::Allow);
    assert_eq!(decide_route(GuardClass::Public, &authed(false), "/login"), NavigationDecision::Allow);
}

// =============================================================
// Table-driven decision + catch-all
// =============================================================

#[test]
fn table_decision_applies_the_matched_guard_class() {
    assert_eq!(decide_for_path(&authed(true), "/admin"), NavigationDecision::Allow);
    assert_eq!(
        decide_for_path(&authed(false), "/admin"),
        NavigationDecision::Redirect {
            to: "/".to_owned(),
            from: None,
        }
    );
}

#[test]
fn unmatched_path_falls_through_to_home() {
    assert_eq!(
        decide_for_path(&authed(false), "/foo/bar"),
        NavigationDecision::Redirect {
            to: "/".to_owned(),
            from: None,
        }
    );
    assert_eq!(
        decide_for_path(&authed(true), "/foo/bar"),
        NavigationDecision::Redirect {
            to: "/".to_owned(),
            from: None,
        }
    );
}

// =============================================================
// Redirect hrefs
// =============================================================

#[test]
fn redirect_href_attaches_encoded_origin() {
    assert_eq!(redirect_href("/login", Some("/chat")), "/login?from=%2Fchat");
    assert_eq!(
        redirect_href("/login", Some("/video/abc?t=10")),
        "/login?from=%2Fvideo%2Fabc%3Ft%3D10"
    );
}

#[test]
fn redirect_href_without_origin_is_bare() {
    assert_eq!(redirect_href("/", None), "/");
}
