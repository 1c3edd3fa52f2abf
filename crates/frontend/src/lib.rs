pub mod app;
pub mod domain;
pub mod shared;

use contracts::shared::config::load_config;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    let level = load_config()
        .map(|config| config.logging.log_level())
        .unwrap_or(log::Level::Info);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
