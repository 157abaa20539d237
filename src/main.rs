//! CareerBridge Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod content;
mod context;
mod error;
mod forms;
mod markdown;
mod models;
mod pages;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
