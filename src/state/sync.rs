//! Session synchronizer transition functions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::auth_gate` owns the browser wiring (one-shot fetch, change
//! subscription, teardown); the store transitions live here so they stay
//! pure and natively testable.
//!
//! ERROR HANDLING
//! ==============
//! A failed or malformed initial fetch is treated as "no session": the
//! loading flag is still cleared so the route gate never blocks in
//! `Loading`, and the failure is logged rather than surfaced.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use crate::net::provider::AuthError;
use crate::net::types::{AuthEvent, Session};
use crate::state::session::SessionStore;

/// Apply the resolution of the one-shot startup session fetch.
///
/// Installs the fetched identity if one exists, then clears the loading
/// flag exactly once regardless of outcome. Does not clear an identity a
/// change notification installed first.
pub fn apply_initial_session(store: &mut SessionStore, fetched: Result<Option<Session>, AuthError>) {
    match fetched {
        Ok(Some(session)) => store.set_identity(Some(session.user)),
        Ok(None) => {}
        Err(err) => log::warn!("initial session fetch failed, treating as signed out: {err}"),
    }
    store.set_loading(false);
}

/// Translate one change notification into a store mutation, 1:1.
///
/// The event kind is informational only; the session payload alone decides
/// the transition, so a malformed or absent payload reads as an explicit
/// absence.
pub fn apply_session_change(store: &mut SessionStore, event: AuthEvent, session: Option<Session>) {
    log::debug!("session change: {event:?}");
    store.set_identity(session.map(|session| session.user));
}
