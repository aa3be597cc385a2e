//! Browser entry point.
//!
//! Installs console logging and the panic hook, loads the embedded
//! configuration and mounts the application shell on `<body>`.

use app::{App, ConfigError};
use companion_core::Config;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    match Config::builtin() {
        Ok(config) => {
            log::info!(
                "mounting {} ({} sections)",
                config.site.title,
                config.navigation.item_count()
            );
            leptos::mount::mount_to_body(move || view! { <App config=config /> });
        }
        Err(err) => {
            log::error!("failed to load configuration: {err}");
            let message = err.to_string();
            leptos::mount::mount_to_body(move || view! { <ConfigError message=message /> });
        }
    }
}
