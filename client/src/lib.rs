//! # client
//!
//! Leptos + WASM frontend for the architectural design assistant.
//!
//! Pages, components and signal-held state live here; the session, project
//! and generation rules come from the `studio` crate. Browser-only code
//! (HTTP via `gloo-net`, `localStorage`, canvas drawing) is gated behind the
//! `hydrate` feature so the same components render on the server.

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
