//! Browser localStorage glue for the credential session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write behavior so pages and guards can
//! consult the stored token without repeating web-sys plumbing. All
//! operations are best-effort; SSR paths safely no-op so server rendering
//! stays deterministic.

use crate::state::session::{Role, SessionState};

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "bilitioo_access_token";
#[cfg(feature = "hydrate")]
const ROLE_KEY: &str = "bilitioo_user_role";

/// Load the persisted session, if any.
pub fn load_session() -> SessionState {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return SessionState::default();
        };
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let role = storage
            .get_item(ROLE_KEY)
            .ok()
            .flatten()
            .map(|r| Role::from_wire(&r));
        SessionState { token, role }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionState::default()
    }
}

/// Persist a freshly issued token and role.
pub fn store_session(token: &str, role: Role) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(ROLE_KEY, role.as_wire());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, role);
    }
}

/// Drop everything stored for this origin on logout.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.clear();
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
