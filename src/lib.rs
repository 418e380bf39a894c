//! # equipboard
//!
//! Leptos + WASM single-page client for managing heavy-equipment records
//! against an external REST backend. Listing with client-side pagination,
//! creation through a modal form, and inspect/edit/delete through a detail
//! dialog.
//!
//! The backend is an external collaborator: this crate only issues plain
//! REST calls against the `equipamento` resource and holds no authoritative
//! state of its own.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the application into `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
