use super::*;

#[test]
fn endpoints_are_stable_paths() {
    assert_eq!(SESSION_ENDPOINT, "/api/auth/session");
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
    assert_eq!(LOGOUT_ENDPOINT, "/api/auth/logout");
}

#[test]
fn session_request_failed_message_formats_status() {
    assert_eq!(session_request_failed_message(500), "session request failed: 500");
}

#[test]
fn sign_in_failed_message_special_cases_unauthorized() {
    assert_eq!(sign_in_failed_message(401), "invalid email or password");
    assert_eq!(sign_in_failed_message(429), "sign-in failed: 429");
}
