use super::*;
use crate::net::types::User;
use crate::state::session::SessionState;

fn session_for(id: &str) -> Session {
    Session {
        user: User {
            id: id.to_owned(),
            name: format!("user-{id}"),
            avatar_url: None,
            is_admin: false,
        },
        expires_at: None,
    }
}

// =============================================================
// Initial fetch resolution
// =============================================================

#[test]
fn initial_fetch_with_session_authenticates_and_clears_loading() {
    let mut store = SessionStore::default();
    apply_initial_session(&mut store, Ok(Some(session_for("u1"))));
    assert!(store.read().is_authenticated());
    assert!(!store.read().is_loading());
}

#[test]
fn initial_fetch_without_session_resolves_to_unauthenticated() {
    let mut store = SessionStore::default();
    apply_initial_session(&mut store, Ok(None));
    assert_eq!(store.read(), &SessionState::Unauthenticated);
}

#[test]
fn initial_fetch_failure_still_clears_loading() {
    let mut store = SessionStore::default();
    apply_initial_session(&mut store, Err(AuthError::Http("boom".to_owned())));
    assert_eq!(store.read(), &SessionState::Unauthenticated);
}

// =============================================================
// Change notifications
// =============================================================

#[test]
fn change_with_session_authenticates() {
    let mut store = SessionStore::default();
    apply_session_change(&mut store, AuthEvent::SignedIn, Some(session_for("u1")));
    assert_eq!(store.read().user().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn change_without_session_signs_out() {
    let mut store = SessionStore::default();
    apply_session_change(&mut store, AuthEvent::SignedIn, Some(session_for("u1")));
    apply_session_change(&mut store, AuthEvent::SignedOut, None);
    assert_eq!(store.read(), &SessionState::Unauthenticated);
}

#[test]
fn absent_payload_wins_over_event_kind() {
    // A malformed/absent payload reads as explicit absence even if the
    // provider claims a sign-in.
    let mut store = SessionStore::default();
    apply_session_change(&mut store, AuthEvent::SignedIn, None);
    assert_eq!(store.read(), &SessionState::Unauthenticated);
}

// =============================================================
// Arrival-order idempotence
// =============================================================

#[test]
fn change_before_initial_fetch_is_not_clobbered() {
    let mut store = SessionStore::default();
    apply_session_change(&mut store, AuthEvent::SignedIn, Some(session_for("u1")));
    apply_initial_session(&mut store, Ok(None));
    assert_eq!(store.read().user().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn initial_fetch_after_sign_out_wins_last() {
    // Relative order is not guaranteed; the store takes the last write.
    let mut store = SessionStore::default();
    apply_session_change(&mut store, AuthEvent::SignedOut, None);
    apply_initial_session(&mut store, Ok(Some(session_for("u1"))));
    assert!(store.read().is_authenticated());
}
