//! # ConnectPro Web
//!
//! Browser frontend for ConnectPro, built with Leptos in client-side
//! rendering mode. All domain behavior lives in `connectpro-app`; this crate
//! binds it to the DOM: routing, browser storage, fetch, and Tailwind markup.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;

use app::App;

/// Browser entry point.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    log::info!("ConnectPro initializing...");

    mount_to_body(App);

    log::info!("ConnectPro mounted successfully");
}
