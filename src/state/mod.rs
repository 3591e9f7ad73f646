//! Shared application state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only cross-page state is the stored credential session; every other
//! piece of state is request-scoped and owned by the page that fetched it.

pub mod session;
