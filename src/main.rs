#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]

use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use transparent_clock::config::WINDOW_TITLE;
use transparent_clock::{ClockOverlay, OverlayConfig, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = OverlayConfig::default();

    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_position(config.position)
        .with_inner_size(config.size)
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_taskbar(false)
        .with_resizable(false);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    info!(position = ?config.position, size = ?config.size, "starting overlay");
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Box::new(ClockOverlay::new(cc, config))),
    )?;
    info!("overlay closed");

    Ok(())
}
