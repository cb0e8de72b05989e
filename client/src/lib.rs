//! # client
//!
//! Leptos + WASM frontend for the personal portfolio site.
//!
//! Renders the About, Projects, Certifications and Contact sections from
//! static `content`, persists the light/dark theme, and reveals sections as
//! they scroll into view. The server renders the page; `hydrate` attaches
//! the browser-side behavior.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
