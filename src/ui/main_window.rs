//! Main application window.
//!
//! A File menu with Open and Save, a full-size text area and a status bar.

use crate::config::{Config, ConfigManager};
use crate::core::dialogs::{FileDialogs, NativeDialogs};
use crate::core::editor::{Editor, Status};
use crate::core::file_bridge::FileBridge;
use crate::ui::theme;
use egui::{Key, KeyboardShortcut, Modifiers, RichText, TextEdit, Ui};

const OPEN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

/// Main window state.
pub struct MainWindow {
    editor: Editor,

    // Config
    config_manager: ConfigManager,
    config: Config,

    // UI State
    status_message: String,
    status_is_error: bool,
    theme_applied: bool,
}

impl MainWindow {
    pub fn new(
        ctx: &egui::Context,
        config_manager: ConfigManager,
        config: Config,
    ) -> std::io::Result<Self> {
        let repaint = ctx.clone();
        let bridge = FileBridge::with_waker(move || repaint.request_repaint())?;

        Ok(Self {
            editor: Editor::new(bridge, config.last_directory.clone()),
            config_manager,
            config,
            status_message: "Ready".to_string(),
            status_is_error: false,
            theme_applied: false,
        })
    }

    /// Render the main window.
    pub fn render(&mut self, ctx: &egui::Context, frame: &eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_dark_theme(ctx);
            self.theme_applied = true;
        }

        let dialogs = NativeDialogs::new(frame);

        if let Some(status) = self.editor.poll(&dialogs) {
            self.set_status(status);
            self.remember_directory();
        }

        self.handle_shortcuts(ctx, &dialogs);

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_size = [rect.width(), rect.height()];
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| self.render_menu(ui, &dialogs));
        });

        // Bottom status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_text_area(ui);
        });
    }

    /// Persist the config. Called when the window closes.
    pub fn save_config(&self) {
        if let Err(e) = self.config_manager.save(&self.config) {
            log::warn!("Failed to save config: {:#}", e);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context, dialogs: &dyn FileDialogs) {
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_SHORTCUT)) {
            self.editor.open(dialogs);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) {
            self.editor.save(dialogs);
        }
    }

    fn render_menu(&mut self, ui: &mut Ui, dialogs: &dyn FileDialogs) {
        let idle = !self.editor.is_busy();

        ui.menu_button("File", |ui| {
            let open = egui::Button::new("Open")
                .shortcut_text(ui.ctx().format_shortcut(&OPEN_SHORTCUT));
            if ui.add_enabled(idle, open).clicked() {
                ui.close_menu();
                self.editor.open(dialogs);
            }

            let save = egui::Button::new("Save")
                .shortcut_text(ui.ctx().format_shortcut(&SAVE_SHORTCUT));
            if ui.add_enabled(idle, save).clicked() {
                ui.close_menu();
                self.editor.save(dialogs);
            }
        });
    }

    fn render_status_bar(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let color = if self.status_is_error {
                theme::error_color()
            } else {
                theme::success_color()
            };
            ui.label(RichText::new(&self.status_message).color(color));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let activity = if self.editor.is_busy() {
                    "Working...".to_string()
                } else if self.editor.document().is_empty() {
                    "Empty".to_string()
                } else {
                    format!("{} bytes", self.editor.document().len())
                };
                ui.label(RichText::new(activity).small().color(theme::dim_color()));
            });
        });
    }

    fn render_text_area(&mut self, ui: &mut Ui) {
        let font = egui::FontId::monospace(self.config.font_size);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let size = ui.available_size();
                ui.add_sized(
                    size,
                    TextEdit::multiline(self.editor.document_mut().text_mut())
                        .font(font)
                        .desired_width(f32::INFINITY)
                        .lock_focus(true),
                );
            });
    }

    fn set_status(&mut self, status: Status) {
        self.status_message = status.message;
        self.status_is_error = status.is_error;
    }

    fn remember_directory(&mut self) {
        let current = self.editor.last_directory();
        if current == self.config.last_directory.as_deref() {
            return;
        }
        self.config.last_directory = current.map(|p| p.to_path_buf());
        self.save_config();
    }
}
