//! Portfolio Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod data;
mod fetch;
mod highlights;
mod logging;
mod models;
mod motion;
mod ordering;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
