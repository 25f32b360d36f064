//! Global route gate: session bootstrap plus the top-level guard.
//!
//! ARCHITECTURE
//! ============
//! `AuthGate` wraps the router's route outlet. On mount it runs the
//! session synchronizer (one-shot fetch + change subscription) and on every
//! session or path change re-evaluates the global guard, rendering the
//! loading placeholder, the children, or nothing while a redirect effect
//! navigates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Per-route guards (`components::route_guard`) are only reachable through
//! this gate's `Allow`, so they never fire while the global gate would
//! itself redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

#[cfg(feature = "csr")]
use crate::net::provider::{AuthProvider, HttpAuthProvider};
use crate::routes::guard::{NavigationDecision, decide, redirect_href};
use crate::state::session::SessionStore;
#[cfg(feature = "csr")]
use crate::state::sync::{apply_initial_session, apply_session_change};

/// Session-aware wrapper around the routed content.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let location = use_location();
    let navigate = use_navigate();

    // Session synchronizer: acquire on mount, release on every exit path.
    #[cfg(feature = "csr")]
    {
        use std::rc::Rc;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_fetch = alive.clone();
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_current_session().await;
            // A resolution arriving after teardown must not touch the store.
            if !alive_fetch.load(Ordering::Relaxed) {
                return;
            }
            session.update(|store| apply_initial_session(store, fetched));
        });

        let provider = HttpAuthProvider::default();
        let subscription = provider.on_session_change(Rc::new(move |event, changed| {
            session.update(|store| apply_session_change(store, event, changed));
        }));
        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            subscription.unsubscribe();
        });
    }

    let pathname = location.pathname;
    let decision = Memo::new(move |_| {
        let store = session.get();
        let path = pathname.get();
        decide(store.read(), &path)
    });

    Effect::new(move || {
        if let NavigationDecision::Redirect { to, from } = decision.get() {
            navigate(
                &redirect_href(&to, from.as_deref()),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        {move || match decision.get() {
            NavigationDecision::Loading => view! {
                <div class="auth-gate__loading">
                    <div class="auth-gate__spinner"></div>
                </div>
            }
            .into_any(),
            NavigationDecision::Allow => children().into_any(),
            NavigationDecision::Redirect { .. } => ().into_any(),
        }}
    }
}
