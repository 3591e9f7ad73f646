//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: protected pages
//! bounce unauthenticated viewers to `/login`, public auth pages bounce
//! authenticated viewers to their role landing route. This is advisory UI
//! convenience only; the server enforces authorization on every request.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Where a protected page should send this viewer, if anywhere.
pub fn protected_redirect(session: &SessionState) -> Option<&'static str> {
    if session.is_authenticated() {
        None
    } else {
        Some("/login")
    }
}

/// Where a public auth page (login/register) should send this viewer.
pub fn public_redirect(session: &SessionState) -> Option<&'static str> {
    if session.is_authenticated() {
        Some(session.landing_route())
    } else {
        None
    }
}

/// Redirect to `/login` whenever no credential token is present.
pub fn install_protected_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = protected_redirect(&session.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Redirect an already-authenticated viewer away from login/register.
pub fn install_public_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = public_redirect(&session.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
