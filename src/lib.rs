pub mod common;
pub mod frontend;
pub mod models;
pub mod services;
#[cfg(feature = "ssr")]
pub mod web;

/// WASM entry point; the served document shell calls this after loading
/// the bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(frontend::App);
}
