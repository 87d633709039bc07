//! # client
//!
//! Leptos + WASM frontend for the password-gated image generator.
//!
//! This crate contains the login and home pages, the navigation guard that
//! protects the home route, the persisted auth flag, and REST helpers for
//! the server's `/auth-login` and `/api/generate-image` endpoints.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
