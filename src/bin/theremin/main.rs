//! theremin - play the touch theremin from a terminal
//!
//! Run with: cargo run --bin theremin
//!
//! The keyboard stands in for the two touch sensors: the arrow keys and
//! space play the pitch bar, WASD and T play the vibrato square.

mod app;
mod ui;

use std::time::Duration;

use app::ThereminApp;
use theremin_dsp::instrument::ThereminConfig;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    ThereminApp::new(ThereminConfig::new())
        .poll_interval(Duration::from_millis(12))
        .run()
}
