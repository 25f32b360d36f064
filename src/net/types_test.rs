use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_admin_flag_defaults_to_false() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Ada","avatar_url":null}"#)
        .expect("user should deserialize without is_admin");
    assert!(!user.is_admin);
}

#[test]
fn session_round_trips_through_json() {
    let session = Session {
        user: User {
            id: "u1".to_owned(),
            name: "Ada".to_owned(),
            avatar_url: Some("https://example.test/a.png".to_owned()),
            is_admin: true,
        },
        expires_at: Some(1_700_000_000),
    };
    let json = serde_json::to_string(&session).expect("session should serialize");
    let back: Session = serde_json::from_str(&json).expect("session should deserialize");
    assert_eq!(back, session);
}

// =============================================================
// AuthEvent wire format
// =============================================================

#[test]
fn auth_event_decodes_screaming_snake_case() {
    let event: AuthEvent = serde_json::from_str(r#""SIGNED_IN""#).expect("event should decode");
    assert_eq!(event, AuthEvent::SignedIn);
    let event: AuthEvent = serde_json::from_str(r#""TOKEN_REFRESHED""#).expect("event should decode");
    assert_eq!(event, AuthEvent::TokenRefreshed);
}

#[test]
fn unrecognized_auth_event_decodes_as_unknown() {
    let event: AuthEvent = serde_json::from_str(r#""MFA_CHALLENGE_VERIFIED""#).expect("event should decode");
    assert_eq!(event, AuthEvent::Unknown);
}
