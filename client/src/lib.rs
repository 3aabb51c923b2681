//! # client
//!
//! Leptos + WASM frontend for the ZUS Coffee query assistant.
//!
//! The crate is built twice: with `hydrate` into the browser bundle, and with
//! `ssr` as a library the Axum host renders the page shell from. The
//! [`widget::ChatWidget`] controller and everything under `state`, `util`
//! and `net::types` compile and test natively with neither feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod widget;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
