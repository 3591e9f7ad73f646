//! # bilitioo-client
//!
//! Leptos + WASM frontend for the Bilitioo ticket-reservation platform
//! (buses, trains, airplanes). Thin presentation layer over the remote
//! REST API: authentication, ticket search and purchase, reservation
//! management, payments, profile editing, and the admin console.
//!
//! This crate contains pages, components, session state, wire types, and
//! the REST helpers. All business logic (pricing, penalties, seat
//! allocation, authorization) lives server-side; the client renders forms,
//! issues HTTP calls, and keeps local UI state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
