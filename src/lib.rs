//! UNIVERSITAS admin panel
//!
//! Server-rendered Leptos application for the UNIVERSITAS role: login,
//! role-gated dashboard, Ente and Supervisor registration, and a
//! same-origin proxy to the backend REST API.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
