use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_from_wire_recognizes_admin() {
    assert_eq!(Role::from_wire("ADMIN"), Role::Admin);
}

#[test]
fn role_from_wire_defaults_to_user() {
    assert_eq!(Role::from_wire("USER"), Role::User);
    assert_eq!(Role::from_wire("admin"), Role::User);
    assert_eq!(Role::from_wire(""), Role::User);
}

#[test]
fn role_wire_spelling_round_trips() {
    assert_eq!(Role::from_wire(Role::Admin.as_wire()), Role::Admin);
    assert_eq!(Role::from_wire(Role::User.as_wire()), Role::User);
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_default_is_unauthenticated() {
    let session = SessionState::default();
    assert!(!session.is_authenticated());
    assert!(session.role.is_none());
}

#[test]
fn authenticated_session_holds_token_and_role() {
    let session = SessionState::authenticated("tok-1".to_owned(), "ADMIN");
    assert!(session.is_authenticated());
    assert_eq!(session.role, Some(Role::Admin));
}

#[test]
fn landing_route_sends_admin_to_admin_dashboard() {
    let session = SessionState::authenticated("tok-1".to_owned(), "ADMIN");
    assert_eq!(session.landing_route(), "/admin/dashboard");
}

#[test]
fn landing_route_sends_user_to_dashboard() {
    let session = SessionState::authenticated("tok-1".to_owned(), "USER");
    assert_eq!(session.landing_route(), "/dashboard");
}

#[test]
fn landing_route_without_role_falls_back_to_dashboard() {
    let session = SessionState {
        token: Some("tok-1".to_owned()),
        role: None,
    };
    assert_eq!(session.landing_route(), "/dashboard");
}
