//! Reusable components around the routed pages.
//!
//! ARCHITECTURE
//! ============
//! `auth_gate` is the global gate, `route_guard` the per-route layer, and
//! `layout` the chrome shell. Page content itself lives in `pages`.

pub mod auth_gate;
pub mod layout;
pub mod route_guard;
