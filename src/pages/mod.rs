//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Page content is deliberately thin; route-level orchestration (guards,
//! session bootstrap, chrome) lives in `components`.

pub mod admin;
pub mod chat;
pub mod home;
pub mod leaderboard;
pub mod login;
pub mod profile;
pub mod settings;
pub mod video;
