//! Recipe Book Frontend Entry Point

mod actions;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod debounce;
mod form;
mod page;
mod search;
mod store;
mod toast;
mod view;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    _ = console_log::init_with_level(config.console_level());
    log::info!("Recipe Book starting (API {})", config.api.base_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
