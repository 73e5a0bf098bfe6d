#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;
#[cfg(target_arch = "wasm32")]
mod state;

#[cfg(target_arch = "wasm32")]
use windowfix_web::{app_lib, features};

#[cfg(target_arch = "wasm32")]
pub fn main() {
    use crate::app::App;
    use app_lib::{build_info, config::AppConfig, telemetry};
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(err) = telemetry::init(telemetry::parse_level(&config.log_level)) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    tracing::info!(commit = build_info::short_commit_hash(), "starting windowfix web");

    mount_to_body(move || view! { <App config=config /> });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
