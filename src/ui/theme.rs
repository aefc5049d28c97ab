//! Theme configuration for egui.
//!
//! Warm dark theme: off-white ink on a charcoal page, amber accents.

use egui::{Color32, Stroke, Visuals};

const BACKGROUND: Color32 = Color32::from_rgb(28, 27, 25);
const PANEL: Color32 = Color32::from_rgb(36, 34, 31);
const WIDGET: Color32 = Color32::from_rgb(50, 47, 43);
const PAGE: Color32 = Color32::from_rgb(22, 21, 19);
const INK: Color32 = Color32::from_rgb(230, 224, 210);
const AMBER: Color32 = Color32::from_rgb(214, 160, 84);

/// Apply the dark theme to egui context.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = Visuals::dark();
    style.visuals.panel_fill = PANEL;
    style.visuals.window_fill = BACKGROUND;
    // TextEdit paints its background with extreme_bg_color
    style.visuals.extreme_bg_color = PAGE;

    style.visuals.widgets.noninteractive.bg_fill = WIDGET;
    style.visuals.widgets.inactive.bg_fill = WIDGET;
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(66, 61, 54);
    style.visuals.widgets.active.bg_fill = AMBER;

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, INK);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, INK);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::BLACK);

    style.visuals.selection.bg_fill = AMBER.gamma_multiply(0.35);
    style.visuals.selection.stroke = Stroke::new(1.0, AMBER);
    style.visuals.text_cursor.stroke = Stroke::new(2.0, AMBER);

    style.visuals.window_rounding = 6.0.into();
    style.visuals.menu_rounding = 4.0.into();

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    ctx.set_style(style);
}

/// Color for successful status messages.
pub fn success_color() -> Color32 {
    Color32::from_rgb(152, 187, 108)
}

/// Color for failed status messages.
pub fn error_color() -> Color32 {
    Color32::from_rgb(224, 108, 98)
}

/// Color for secondary status bar text.
pub fn dim_color() -> Color32 {
    Color32::from_rgb(140, 134, 122)
}
