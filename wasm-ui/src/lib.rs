//! Web UI for usage-viewer
//!
//! A Yew-based page that fetches `database.csv`, filters it by year,
//! month and email, and shows it 25 rows at a time.

mod app;
mod components;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
