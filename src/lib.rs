//! # voltboard
//!
//! Leptos + WASM frontend for the Voltboard solar-fleet portal.
//!
//! This crate is the presentation layer only: route-level pages, the
//! role-aware [`components::access_gate::AccessGate`] route guard, dashboard
//! display widgets, and styled form controls. Session issuance and all
//! server-side authorization live behind the HTTP API consumed by `net`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point for hydration builds.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
