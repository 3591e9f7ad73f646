//! Credential-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and page headers read this to coordinate login redirects
//! and role-dependent navigation. It mirrors the token and role persisted
//! in localStorage; `util::storage` owns the persistence glue.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Account role as reported by the login endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Parse the wire role string. Anything the client does not recognize
    /// is treated as a regular user; role checks are advisory UI routing
    /// only, never an authorization decision.
    pub fn from_wire(role: &str) -> Self {
        if role == "ADMIN" { Self::Admin } else { Self::User }
    }

    /// The wire spelling, used when persisting the session.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }
}

/// Session state tracking the stored access token and account role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl SessionState {
    /// Build a session from a freshly issued token and wire role string.
    pub fn authenticated(token: String, role: &str) -> Self {
        Self {
            token: Some(token),
            role: Some(Role::from_wire(role)),
        }
    }

    /// Whether a credential token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Route an authenticated user lands on after login.
    pub fn landing_route(&self) -> &'static str {
        match self.role {
            Some(Role::Admin) => "/admin/dashboard",
            _ => "/dashboard",
        }
    }
}
