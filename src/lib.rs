//! # reel-client
//!
//! Leptos + WASM frontend route gate for the Reel video platform.
//!
//! The core is the session-state machine and navigation-guard logic: a
//! process-wide session store fed by an auth-backend synchronizer, a pure
//! guard deciding between loading placeholder, render, and redirect, and a
//! static route table classifying every path as public, protected, or
//! admin-only. Page content is intentionally thin.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// Mount the application into the document body.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
fn start() {
    mount();
}
