//! Beacon UI Catalog - Binary Entry Point

use tracing::info;
use tracing_subscriber::EnvFilter;

use beacon_ui::app::application::run_app;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Beacon UI {} starting", env!("CARGO_PKG_VERSION"));

    run_app();
}
