use wasm_bindgen::prelude::*;

pub mod ui;
mod util;

pub use util::browser_settings;

/// Routes `tracing` events to the browser console
pub fn setup_tracing() {
    tracing_wasm::set_as_global_default();
}

#[wasm_bindgen(start)]
pub fn start() {
    setup_tracing();
    tracing::debug!("rumors-web loaded");
}
