//! Leaderboard page shell.

use leptos::prelude::*;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    view! {
        <section class="leaderboard-page">
            <h1>"Leaderboard"</h1>
        </section>
    }
}
