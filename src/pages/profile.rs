//! Profile page shell. Reads the username from the route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let username = move || params.read().get("username").unwrap_or_default();

    view! {
        <section class="profile-page">
            <h1>{username}</h1>
        </section>
    }
}
