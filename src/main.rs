use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod fetch;
mod pages;
mod settings;
mod shared;
mod storage;
mod theme;
mod utils;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[cfg(feature = "desktop")]
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

fn main() {
    #[cfg(feature = "desktop")]
    init_tracing();

    let cfg = settings::init(settings::AppSettings::from_environment());
    dioxus::logger::tracing::info!("[config] prediction service at {}", cfg.api_base_url);

    dioxus::launch(app::App);
}
