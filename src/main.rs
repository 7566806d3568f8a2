//! Grab Or Dine Menu Frontend Entry Point

mod app;
mod components;
mod context;
mod format;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging();
    mount_to_body(App);
}
