//! Application shell: header chrome around the routed page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nav entries derive from the route table so chrome and guards cannot
//! drift apart; the identity display and sign-out control read the same
//! session store as the guards.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::routes::table::nav_entries;
use crate::state::session::SessionStore;

/// Shared layout for the protected views.
#[component]
pub fn Layout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    let display_name = move || session.with(|store| store.read().user().map(|user| user.name.clone()));

    let on_sign_out = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::net::api::sign_out().await;
            session.update(|store| store.set_identity(None));
        });
    };

    view! {
        <div class="app-shell">
            <header class="app-shell__header">
                <A href="/">"Reel"</A>
                <nav class="app-shell__nav">
                    {move || {
                        session
                            .with(|store| nav_entries(store.read()))
                            .into_iter()
                            .map(|(path, label)| view! { <A href=path>{label}</A> })
                            .collect_view()
                    }}
                </nav>
                <div class="app-shell__identity">
                    <span class="app-shell__name">{display_name}</span>
                    <button class="app-shell__signout" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </header>
            <main class="app-shell__content">
                <Outlet/>
            </main>
        </div>
    }
}
