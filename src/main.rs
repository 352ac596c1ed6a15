//! Evyma Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod error;
mod insights;
mod logging;
mod models;
mod network;
mod pages;
mod router;
mod storage;
mod stores;
mod theme;
mod toast;
mod transition;

#[cfg(test)]
mod test_support;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    logging::init(config.log_level);
    log::info!("[APP] starting Evyma");

    // Mount only after the SDK client exists; without one the gate shows an error
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = base44_client::connect(config.base44_app_id.unwrap_or_default()).await {
            log::error!("[APP] Base44 client unavailable: {}", err);
        }
        mount_to_body(move || view! { <App config=config /> });
    });
}
