#![allow(dead_code)]
//! Timeline Feed Frontend Entry Point

mod models;
mod error;
mod config;
mod filter;
mod reveal;
mod session;
mod api;
mod hooks;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::TimelineConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("Timeline", log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }

    let config = TimelineConfig::from_window();
    log::info!("[App] timeline endpoint {}", config.endpoint_url());

    mount_to_body(move || view! { <App config=config /> });
}
