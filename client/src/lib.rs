//! # documanager-client
//!
//! Leptos + WASM front-end for DocuManager: a session gate in front of a
//! sidebar shell with four document-management views.
//!
//! Authentication is delegated to an external hosted provider behind the
//! `net::auth::AuthProvider` trait; this crate never stores credentials.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
