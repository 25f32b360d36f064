//! Home feed landing page.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let greeting = move || {
        session
            .with(|store| store.read().user().map(|user| user.name.clone()))
            .unwrap_or_else(|| "there".to_owned())
    };

    view! {
        <section class="home-page">
            <h1>"Home"</h1>
            <p class="home-page__greeting">"Welcome back, " {greeting} "."</p>
        </section>
    }
}
