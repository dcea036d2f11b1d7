//! # portfolio
//!
//! Leptos + WASM frontend for a single-page personal portfolio.
//!
//! The page is static content rendered from the tables in [`data`]. The one
//! piece of durable client state is the light/dark theme preference, owned by
//! [`state::theme::ThemeStore`] and exposed to components through
//! [`components::theme_provider::use_theme`].

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
