pub mod app;
pub mod image_card;
pub mod image_grid;
pub mod search_bar;
pub mod unsplash;

use crate::app::App;
use leptos::mount::mount_to_body;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log_level()).expect("Failed to initialize logger");
    mount_to_body(App);
}

fn log_level() -> log::Level {
    option_env!("LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::Level::Info)
}
