//! Per-route guard wrapper applying the route table's guard class.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside `AuthGate`, so the session is already resolved and the
//! global policy has allowed rendering; this layer only enforces the
//! narrower protected/admin requirements of the matched route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::guard::{NavigationDecision, decide_for_path, redirect_href};
use crate::state::session::SessionStore;

/// Wrapper enforcing the matched route's guard class on its children.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let location = use_location();
    let navigate = use_navigate();

    let pathname = location.pathname;
    let decision = Memo::new(move |_| {
        let store = session.get();
        let path = pathname.get();
        decide_for_path(store.read(), &path)
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

    // Loading is unreachable here in practice (the gate above renders the
    // placeholder); nothing is rendered while a redirect is in flight.
    view! {
        <Show when=move || decision.get() == NavigationDecision::Allow>
            {children()}
        </Show>
    }
}
