//! # bookdrop-ui
//!
//! Leptos + WASM front-end demo for the local book-digitization service.
//! Two widgets: a hover-aware demo button, and an upload panel that sends
//! a chosen PDF to the service and echoes the outcome in a status line.
//!
//! Browser-only code (DOM access, HTTP) is gated behind the `csr` feature
//! so the crate also compiles natively, where the test suite runs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and mount the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
