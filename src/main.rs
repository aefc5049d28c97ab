//! Scratchpad - a minimal plain-text editor.
//!
//! One window, one text area, and a File menu that opens and saves UTF-8
//! files through native dialogs.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod ui;
mod utils;

use app::App;
use config::ConfigManager;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config_manager = ConfigManager::new();
    let config = config_manager.load();
    log::info!(
        "Starting Scratchpad (config: {})",
        config_manager.get_config_file_path().display()
    );

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Scratchpad")
            .with_inner_size(config.window_size)
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Scratchpad",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config_manager, config)?))),
    )
}
