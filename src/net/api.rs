//! HTTP helpers for the auth backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Outside the browser
//! the calls degrade to `None`/error stubs so the pure core still compiles
//! and tests natively.
//!
//! ERROR HANDLING
//! ==============
//! `fetch_current_session` reports `AuthError` so the synchronizer can
//! distinguish transport from decode failures in logs; the login-flow calls
//! return error strings for direct display, like the rest of the UI layer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::provider::AuthError;
use crate::net::types::Session;

/// One-shot current-session endpoint.
pub const SESSION_ENDPOINT: &str = "/api/auth/session";
/// Password sign-in endpoint.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
/// Sign-out endpoint.
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "csr"))]
fn session_request_failed_message(status: u16) -> String {
    format!("session request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn sign_in_failed_message(status: u16) -> String {
    if status == 401 {
        "invalid email or password".to_owned()
    } else {
        format!("sign-in failed: {status}")
    }
}

/// Fetch the current session from the auth backend.
///
/// Returns `Ok(None)` when no session exists (204/401); outside the browser
/// this is always `Ok(None)`.
///
/// # Errors
///
/// `AuthError::Http` on transport failure or unexpected status,
/// `AuthError::Decode` on a malformed payload.
pub async fn fetch_current_session() -> Result<Option<Session>, AuthError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .map_err(|e| AuthError::Http(e.to_string()))?;
        if resp.status() == 204 || resp.status() == 401 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(AuthError::Http(session_request_failed_message(resp.status())));
        }
        let session = resp
            .json::<Session>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok(Some(session))
    }
    #[cfg(not(feature = "csr"))]
    {
        Ok(None)
    }
}

/// Sign in with email and password, returning the new session.
///
/// # Errors
///
/// Returns a display-ready error string if the request fails or the
/// credentials are rejected.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        resp.json::<Session>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// End the current session by calling `POST /api/auth/logout`.
pub async fn sign_out() {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await;
    }
}
