//! Video page shell. Reads the video ID from the route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn VideoPage() -> impl IntoView {
    let params = use_params_map();
    let video_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <section class="video-page">
            <h1>"Video"</h1>
            <p class="video-page__id">{video_id}</p>
        </section>
    }
}
