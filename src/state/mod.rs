//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the pure state container; `sync` holds the transition
//! functions the synchronizer feeds it with. Components observe both
//! through an `RwSignal<SessionStore>` context.

pub mod session;
pub mod sync;
