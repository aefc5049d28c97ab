//! Native dialog seam.
//!
//! The editor session only talks to dialogs through [`FileDialogs`], so the
//! open/save sequencing can be driven by scripted dialogs in tests.

use rfd::{AsyncFileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

/// Pending dialog answer. Resolves to `None` when the user cancels.
pub type DialogFuture<T> = Pin<Box<dyn Future<Output = Option<T>> + Send>>;

/// Dialogs the editor needs from the host.
///
/// File pickers are created on the UI thread and awaited elsewhere, so the
/// window keeps painting while they are open.
pub trait FileDialogs {
    /// Ask for files to open.
    fn pick_open(&self, start_dir: Option<&Path>) -> DialogFuture<Vec<PathBuf>>;

    /// Ask for a destination.
    fn pick_save(&self, start_dir: Option<&Path>) -> DialogFuture<PathBuf>;

    /// Show a blocking error box.
    fn show_error(&self, title: &str, message: &str);
}

/// `rfd` dialogs owned by the application window.
pub struct NativeDialogs<'a> {
    parent: &'a eframe::Frame,
}

impl<'a> NativeDialogs<'a> {
    pub fn new(parent: &'a eframe::Frame) -> Self {
        Self { parent }
    }

    fn file_dialog(&self, start_dir: Option<&Path>) -> AsyncFileDialog {
        let dialog = AsyncFileDialog::new()
            .add_filter("Text Files", &["txt", "md", "log"])
            .add_filter("All Files", &["*"])
            .set_parent(self.parent);
        match start_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }
}

impl FileDialogs for NativeDialogs<'_> {
    fn pick_open(&self, start_dir: Option<&Path>) -> DialogFuture<Vec<PathBuf>> {
        let picked = self.file_dialog(start_dir).pick_file();
        Box::pin(async move { picked.await.map(|handle| vec![handle.path().to_path_buf()]) })
    }

    fn pick_save(&self, start_dir: Option<&Path>) -> DialogFuture<PathBuf> {
        let picked = self.file_dialog(start_dir).save_file();
        Box::pin(async move { picked.await.map(|handle| handle.path().to_path_buf()) })
    }

    fn show_error(&self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .set_parent(self.parent)
            .show();
    }
}
