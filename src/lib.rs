//! # blog-client
//!
//! Leptos + WASM front-end for the blog platform: public post list,
//! account dashboard, and the separate admin console (one-time setup,
//! session login, user/audit/traffic/attack/banned-IP management).
//!
//! Talks to the backend exclusively through credentialed JSON REST calls
//! under a configurable `/api` base; the backend itself lives elsewhere.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hook up logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
