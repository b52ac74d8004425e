//! # client
//!
//! Leptos + WASM frontend for the turntable photo rig.
//!
//! This crate contains the capture, projects, viewer and settings pages, their
//! state, and the REST bindings to the capture backend. The 360° carousel
//! behavior itself lives in the `carousel` crate; this crate only renders its
//! state and runs the browser timers and listeners it asks for.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
