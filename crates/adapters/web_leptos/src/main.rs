//! # maintrack-web
//!
//! Composition root of the browser application.
//!
//! ## Responsibilities
//! - Route panics to the browser console
//! - Load the embedded configuration and install logging
//! - Mount the root component

use leptos::prelude::*;
use maintrack_web::App;
use maintrack_web::config::Config;
use maintrack_web::logging;

fn main() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    logging::init(&config.logging.filter);
    if let Some(err) = load_error {
        tracing::error!(error = %err, "invalid configuration, using defaults");
    }
    tracing::info!(base_url = %config.api.base_url, "starting maintrack");

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
