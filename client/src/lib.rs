//! # shipwright-client
//!
//! Leptos + WASM frontend for the Shipwright one-page site builder.
//!
//! This crate contains the editing page, application state, the document
//! synchronization engine (`sync`), network types, the WebSocket channel
//! client, and the REST persistence gateway. The engine in `sync` owns all
//! state-machine and concurrency-correctness logic; pages and components are
//! view glue over it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod sync;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
