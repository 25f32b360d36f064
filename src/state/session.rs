//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is held in an `RwSignal<SessionStore>` provided via context, so
//! every mutation notifies route guards and user-aware components through
//! signal reactivity. Only the session synchronizer (`state::sync`) mutates
//! it; everything else is a read-only observer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// The three-way session state driven by the auth backend.
///
/// `Loading` holds only between startup and the first resolution of the
/// initial session fetch; afterwards the state moves between
/// `Authenticated` and `Unauthenticated` directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Bootstrap window: the initial session fetch has not resolved yet.
    #[default]
    Loading,
    /// A provider-issued identity is present.
    Authenticated(User),
    /// No session exists.
    Unauthenticated,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Current identity, if authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    /// Whether the current identity carries the elevated-privilege flag.
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.is_admin)
    }
}

/// Process-wide session container.
///
/// A pure state holder with no error conditions: mutations accept the opaque
/// identity as-is and are idempotent under repeated or reordered delivery
/// (last write wins).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore {
    state: SessionState,
}

impl SessionStore {
    /// Install or clear the current identity.
    ///
    /// `Some` transitions to `Authenticated`, `None` to `Unauthenticated`,
    /// regardless of the prior state.
    pub fn set_identity(&mut self, user: Option<User>) {
        self.state = match user {
            Some(user) => {
                log::debug!("session: authenticated as {}", user.id);
                SessionState::Authenticated(user)
            }
            None => {
                log::debug!("session: unauthenticated");
                SessionState::Unauthenticated
            }
        };
    }

    /// Bootstrap-window loading flag.
    ///
    /// Clearing the flag resolves a still-`Loading` store to
    /// `Unauthenticated` and is a no-op once an identity decision exists;
    /// setting it only re-enters `Loading` from a not-yet-authenticated
    /// store. An identity installed before the initial fetch resolves is
    /// therefore never clobbered.
    pub fn set_loading(&mut self, loading: bool) {
        match (loading, &self.state) {
            (true, SessionState::Loading | SessionState::Unauthenticated) => {
                self.state = SessionState::Loading;
            }
            (false, SessionState::Loading) => {
                self.state = SessionState::Unauthenticated;
            }
            _ => {}
        }
    }

    /// Side-effect-free snapshot of the current state.
    pub fn read(&self) -> &SessionState {
        &self.state
    }
}
