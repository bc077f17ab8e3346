//! # satsjar-web
//!
//! Leptos + WASM front-end for the Sats Jar savings app.
//!
//! This crate contains the parent and child login surfaces, the session and
//! notification state they write to, and the REST glue for the external
//! Sats Jar API. The `server` crate renders it with SSR and serves the
//! hydrated bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
