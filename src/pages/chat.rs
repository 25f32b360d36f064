//! Chat page shell.

use leptos::prelude::*;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <section class="chat-page">
            <h1>"Chat"</h1>
        </section>
    }
}
