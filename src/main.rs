//! PackPal Frontend Entry Point

mod app;
mod charts;
mod commands;
mod components;
mod context;
mod drafts;
mod filter;
mod geometry;
mod mock;
mod models;
mod nav;
mod pickup;
mod status_feed;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
