#![allow(warnings)]
//! Item List Frontend Entry Point

mod app;
mod components;
mod context;
mod dialog;
mod storage;
mod surface;

use app::App;
use leptos::prelude::*;
use list_core::ListConfig;
use tracing::warn;

/// Build-time overrides for `ListConfig`
const CONFIG_JSON: &str = include_str!("../list.config.json");

fn main() {
    console_error_panic_hook::set_once();

    let parsed = ListConfig::from_json(CONFIG_JSON);
    let config = parsed.clone().unwrap_or_default();
    console_logger::init(console_logger::parse_level(&config.log_level));
    if let Err(e) = parsed {
        warn!(error = %e, "using default config");
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
