//! Core editor logic: document buffer, file bridge and dialog seam.

pub mod dialogs;
pub mod document;
pub mod editor;
pub mod error;
pub mod file_bridge;
