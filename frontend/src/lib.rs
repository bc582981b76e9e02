//! Browser entry point for the countrydex single-page app.
//!
//! Sets up the panic hook and console logger, then mounts the root
//! component onto `<body>`.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
