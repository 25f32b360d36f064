//! Admin console shell. Reachable only through the admin-only guard.

use leptos::prelude::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <section class="admin-page">
            <h1>"Admin"</h1>
        </section>
    }
}
