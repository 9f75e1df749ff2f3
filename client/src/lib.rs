//! # client
//!
//! Leptos + WASM admin frontend for speakers, venues and reservations.
//!
//! All REST traffic goes through the `api` crate; this crate supplies the
//! browser edges (`gloo-net` transport, `localStorage` token slot, full-page
//! login redirect) and the route-level UI on top of `api::crud`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
