//! Auth-provider boundary: one-shot session fetch plus change subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthGate` consumes this boundary; tests substitute an in-memory fake.
//! The production `HttpAuthProvider` derives change notifications from a
//! poll loop, so from the gate's perspective the backend behaves like a
//! push-based identity provider.
//!
//! DESIGN
//! ======
//! `Subscription` is the only cancellation primitive: once released (via
//! `unsubscribe` or drop), no further callback is delivered, on any exit
//! path. Delivery itself stays on the single-threaded browser event loop.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "csr")]
use std::time::Duration;

use thiserror::Error;

use crate::net::types::{AuthEvent, Session};

/// How often the production provider re-checks the session endpoint.
#[cfg(feature = "csr")]
pub const SESSION_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Failure modes of the session boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Transport failure or unexpected HTTP status.
    #[error("session request failed: {0}")]
    Http(String),
    /// The backend answered with a payload this client cannot decode.
    #[error("malformed session payload: {0}")]
    Decode(String),
}

/// Boxed local future for the one-shot session fetch.
pub type SessionFuture = Pin<Box<dyn Future<Output = Result<Option<Session>, AuthError>>>>;

/// Callback invoked for every session-change notification.
pub type ChangeCallback = Rc<dyn Fn(AuthEvent, Option<Session>)>;

/// The two operations the route gate consumes from the identity provider.
pub trait AuthProvider {
    /// One-shot fetch of the existing session, used once at startup.
    fn get_current_session(&self) -> SessionFuture;

    /// Register a persistent change listener. Delivery stops permanently
    /// once the returned handle is released.
    fn on_session_change(&self, callback: ChangeCallback) -> Subscription;
}

/// Handle to a live change subscription.
///
/// Dropping the handle releases the subscription, so holding it scopes the
/// listener's lifetime even when setup fails partway.
#[derive(Debug)]
pub struct Subscription {
    live: Arc<AtomicBool>,
}

impl Subscription {
    /// Wrap `callback` in a delivery gate tied to a new subscription.
    ///
    /// Providers deliver through the returned callback; once the
    /// subscription is released the gate silently discards every call,
    /// including notifications already queued on the event loop.
    pub fn wrap(callback: ChangeCallback) -> (Self, ChangeCallback) {
        let live = Arc::new(AtomicBool::new(true));
        let gate = live.clone();
        let deliver: ChangeCallback = Rc::new(move |event, session| {
            if gate.load(Ordering::Relaxed) {
                callback(event, session);
            }
        });
        (Self { live }, deliver)
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }

    /// Stop delivery permanently.
    pub fn unsubscribe(&self) {
        self.live.store(false, Ordering::Relaxed);
    }

    /// Shared liveness flag, for provider loops that must stop polling
    /// once the subscriber is gone.
    pub fn live_handle(&self) -> Arc<AtomicBool> {
        self.live.clone()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Classify a snapshot diff into the event kind reported to subscribers.
pub fn classify_session_change(previous: Option<&Session>, current: Option<&Session>) -> AuthEvent {
    match (previous, current) {
        (None, Some(_)) => AuthEvent::SignedIn,
        (Some(_), None) => AuthEvent::SignedOut,
        (Some(before), Some(after)) if before.user.id != after.user.id => AuthEvent::SignedIn,
        (Some(_), Some(_)) => AuthEvent::UserUpdated,
        (None, None) => AuthEvent::Unknown,
    }
}

/// Production provider backed by the HTTP session endpoint.
///
/// Change notifications come from a poll loop diffing consecutive
/// snapshots; the loop exits as soon as the subscription is released.
#[cfg(feature = "csr")]
pub struct HttpAuthProvider {
    poll_interval: Duration,
}

#[cfg(feature = "csr")]
impl HttpAuthProvider {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }
}

#[cfg(feature = "csr")]
impl Default for HttpAuthProvider {
    fn default() -> Self {
        Self::new(SESSION_POLL_INTERVAL)
    }
}

#[cfg(feature = "csr")]
impl AuthProvider for HttpAuthProvider {
    fn get_current_session(&self) -> SessionFuture {
        Box::pin(crate::net::api::fetch_current_session())
    }

    fn on_session_change(&self, callback: ChangeCallback) -> Subscription {
        let (subscription, deliver) = Subscription::wrap(callback);
        let live = subscription.live_handle();
        let interval = self.poll_interval;
        leptos::task::spawn_local(async move {
            let mut last: Option<Session> = None;
            loop {
                gloo_timers::future::sleep(interval).await;
                if !live.load(Ordering::Relaxed) {
                    break;
                }
                let current = match crate::net::api::fetch_current_session().await {
                    Ok(current) => current,
                    Err(err) => {
                        log::warn!("session poll failed: {err}");
                        continue;
                    }
                };
                if current == last {
                    continue;
                }
                let event = classify_session_change(last.as_ref(), current.as_ref());
                last = current.clone();
                deliver(event, current);
            }
        });
        subscription
    }
}
