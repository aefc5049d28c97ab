//! UI modules.

pub mod main_window;
pub mod theme;
