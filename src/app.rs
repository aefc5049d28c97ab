//! Application state and eframe integration.
//!
//! Main application structure implementing eframe::App trait.

use crate::config::{Config, ConfigManager};
use crate::ui::main_window::MainWindow;
use eframe::egui;

/// Main application state.
pub struct App {
    main_window: MainWindow,
}

impl App {
    /// Create a new application instance.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config_manager: ConfigManager,
        config: Config,
    ) -> std::io::Result<Self> {
        Ok(Self {
            main_window: MainWindow::new(&cc.egui_ctx, config_manager, config)?,
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.main_window.render(ctx, frame);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.main_window.save_config();
    }
}
