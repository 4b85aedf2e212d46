//! Taskdeck Entry Point

mod analytics;
mod api;
mod app;
mod components;
mod context;
mod edit;
mod icons;
mod models;
mod storage;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
