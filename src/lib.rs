//! # social-net-client
//!
//! Leptos + WASM front end for the social network.
//!
//! The crate holds the static route table (`routes`), the user-info REST
//! helper (`net`), and the thin page components the router mounts. Browser
//! builds use `csr` (client-only) or `hydrate` (paired with an `ssr` host).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;

/// Hydrate server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_browser_logging();
    leptos::mount::hydrate_body(app::App);
}

/// Mount the app into `<body>` as a client-only SPA.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    init_browser_logging();
    leptos::mount::mount_to_body(app::App);
}

#[cfg(feature = "browser")]
fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
