//! # client
//!
//! Leptos front-end for the MedCore medical news portal.
//!
//! The crate holds the routed pages, the navigation shell, the session store
//! and the typed REST client. Decision logic (envelope handling, the
//! dashboard gate, the registration flow, listing freshness) lives in plain
//! `state` and `util` types so it is testable without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
