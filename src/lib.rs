//! # gestion-boissons-ui
//!
//! Leptos + WASM frontend for the beverage-inventory management system.
//! Replaces the Vue SPA with a Rust-native UI layer.
//!
//! This crate contains pages, application state, network types, the thin
//! HTTP wrappers around the remote inventory API, and the session /
//! navigation-authorization guard that decides, on every attempted page
//! transition, whether to proceed or redirect.

pub mod app;
pub mod components;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the app into the browser document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
