//! Route table and navigation-guard logic.
//!
//! ARCHITECTURE
//! ============
//! `table` owns the static path → (view, guard class) mapping; `guard`
//! evaluates it together with the session state into pure navigation
//! decisions. Rendering and redirect side effects live in `components`.

pub mod guard;
pub mod table;
