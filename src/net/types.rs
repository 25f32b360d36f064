//! Wire DTOs for the auth-backend boundary.
//!
//! DESIGN
//! ======
//! The route gate treats the session as opaque beyond presence/absence and
//! the admin attribute; these types carry exactly that plus the display
//! fields user-aware chrome needs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated principal as issued by the auth backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Elevated-privilege flag consulted by the admin route guard.
    #[serde(default)]
    pub is_admin: bool,
}

/// Provider session payload; the route gate only extracts `user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated principal this session proves.
    pub user: User,
    /// Expiry in seconds since the Unix epoch, if the provider reports one.
    pub expires_at: Option<i64>,
}

/// Change-notification kind delivered alongside a session payload.
///
/// Informational only: the session payload decides the state transition,
/// the event kind is logged for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    /// Any event kind this client does not recognize.
    #[serde(other)]
    Unknown,
}
