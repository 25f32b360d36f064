//! Settings page shell.

use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <section class="settings-page">
            <h1>"Settings"</h1>
        </section>
    }
}
