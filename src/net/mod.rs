//! Networking modules for the remote reservation API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and `types` defines the wire schema. The API
//! contract is owned by the server; nothing here validates or derives
//! invariants over the records it carries.

pub mod api;
pub mod types;
