//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router declaration mirrors `routes::table::ROUTES` one-to-one:
//! `/login` is the only public route, everything under the layout shell is
//! wrapped in `Guarded`, and unmatched paths fall back to the catch-all
//! redirect.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::auth_gate::AuthGate;
use crate::components::layout::Layout;
use crate::components::route_guard::Guarded;
use crate::pages::{
    admin::AdminPage, chat::ChatPage, home::HomePage, leaderboard::LeaderboardPage, login::LoginPage,
    profile::ProfilePage, settings::SettingsPage, video::VideoPage,
};
use crate::state::session::SessionStore;

/// Root application component.
///
/// Provides the session store context and sets up client-side routing
/// behind the auth gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::default());
    provide_context(session);

    view! {
        <Title text="Reel"/>

        <Router>
            <AuthGate>
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ParentRoute path=StaticSegment("") view=Layout>
                        <Route path=StaticSegment("") view=|| view! { <Guarded><HomePage/></Guarded> }/>
                        <Route path=StaticSegment("chat") view=|| view! { <Guarded><ChatPage/></Guarded> }/>
                        <Route
                            path=StaticSegment("leaderboard")
                            view=|| view! { <Guarded><LeaderboardPage/></Guarded> }
                        />
                        <Route
                            path=(StaticSegment("video"), ParamSegment("id"))
                            view=|| view! { <Guarded><VideoPage/></Guarded> }
                        />
                        <Route
                            path=(StaticSegment("profile"), ParamSegment("username"))
                            view=|| view! { <Guarded><ProfilePage/></Guarded> }
                        />
                        <Route
                            path=StaticSegment("settings")
                            view=|| view! { <Guarded><SettingsPage/></Guarded> }
                        />
                        <Route path=StaticSegment("admin") view=|| view! { <Guarded><AdminPage/></Guarded> }/>
                    </ParentRoute>
                </Routes>
            </AuthGate>
        </Router>
    }
}
