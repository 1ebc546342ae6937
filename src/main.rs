//! Todo Session UI Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod session;
mod store;
mod todo_sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warnings) = config::load();
    let _ = console_log::init_with_level(config.log_level());
    for warning in warnings {
        log::warn!("[CONFIG] {}", warning);
    }
    log::info!("[APP] starting, api base {:?}, timeout {} ms", config.api_base, config.request_timeout_ms);

    mount_to_body(move || view! { <App config=config /> });
}
