//! HAN CRM Frontend Entry Point

mod context;
mod store;
mod hooks;
mod components;
mod pages;
mod app;

use app::App;
use crm_core::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    if let Err(err) = console_logger::init_logger("han-crm-ui", &config.log_level) {
        web_sys::console::warn_1(&format!("logger setup failed: {}", err).into());
    }
    tracing::info!(api = %config.api_base_url, version = %config.app_version, "starting");
    mount_to_body(move || view! { <App config=config.clone()/> });
}
