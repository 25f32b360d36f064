//! Networking modules for the auth-backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the HTTP calls, `provider` the subscription boundary the
//! route gate consumes, and `types` the shared wire schema.

pub mod api;
pub mod provider;
pub mod types;
