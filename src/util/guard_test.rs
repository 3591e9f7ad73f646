use super::*;
use crate::state::session::SessionState;

fn authed(role: &str) -> SessionState {
    SessionState::authenticated("tok-1".to_owned(), role)
}

// =============================================================
// Protected pages
// =============================================================

#[test]
fn protected_redirect_sends_anonymous_to_login() {
    assert_eq!(protected_redirect(&SessionState::default()), Some("/login"));
}

#[test]
fn protected_redirect_lets_authenticated_through() {
    assert_eq!(protected_redirect(&authed("USER")), None);
    assert_eq!(protected_redirect(&authed("ADMIN")), None);
}

// =============================================================
// Public auth pages
// =============================================================

#[test]
fn public_redirect_lets_anonymous_through() {
    assert_eq!(public_redirect(&SessionState::default()), None);
}

#[test]
fn public_redirect_sends_user_to_dashboard() {
    assert_eq!(public_redirect(&authed("USER")), Some("/dashboard"));
}

#[test]
fn public_redirect_sends_admin_to_admin_dashboard() {
    assert_eq!(public_redirect(&authed("ADMIN")), Some("/admin/dashboard"));
}
