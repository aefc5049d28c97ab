//! Editor session: the document buffer plus the Open/Save sequencing.
//!
//! Each command runs dialog, then file operation, then buffer update, in
//! that order. A canceled dialog ends the command without side effects.

use crate::core::dialogs::FileDialogs;
use crate::core::document::Document;
use crate::core::file_bridge::{FileBridge, FileEvent};
use crate::utils::file_helper;
use std::path::{Path, PathBuf};

/// Outcome line for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    fn info(message: String) -> Self {
        Self {
            message,
            is_error: false,
        }
    }

    fn error(message: String) -> Self {
        Self {
            message,
            is_error: true,
        }
    }
}

pub struct Editor {
    document: Document,
    bridge: FileBridge,
    last_directory: Option<PathBuf>,
}

impl Editor {
    pub fn new(bridge: FileBridge, last_directory: Option<PathBuf>) -> Self {
        Self {
            document: Document::new(),
            bridge,
            last_directory,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// True while a dialog or the file operation after it is pending.
    pub fn is_busy(&self) -> bool {
        self.bridge.is_busy()
    }

    /// Directory of the last file opened or saved.
    pub fn last_directory(&self) -> Option<&Path> {
        self.last_directory.as_deref()
    }

    /// Show the open dialog and hand it to the bridge. Returns true if a
    /// job started; a cancel arrives later as a silent completion.
    pub fn open(&mut self, dialogs: &dyn FileDialogs) -> bool {
        if self.is_busy() {
            return false;
        }

        let picked = dialogs.pick_open(self.last_directory());
        self.bridge.open(picked)
    }

    /// Snapshot the buffer, then show the save dialog and hand both to the
    /// bridge. Returns true if a job started.
    pub fn save(&mut self, dialogs: &dyn FileDialogs) -> bool {
        if self.is_busy() {
            return false;
        }

        let contents = self.document.snapshot();
        let picked = dialogs.pick_save(self.last_directory());
        self.bridge.save(picked, contents)
    }

    /// Apply a finished operation, if any. Called once per frame.
    pub fn poll(&mut self, dialogs: &dyn FileDialogs) -> Option<Status> {
        let event = self.bridge.poll()?;
        self.apply(event, dialogs)
    }

    /// Block until the running operation finishes and apply it.
    #[cfg(test)]
    pub fn wait(&mut self, dialogs: &dyn FileDialogs) -> Option<Status> {
        let event = self.bridge.wait()?;
        self.apply(event, dialogs)
    }

    fn apply(&mut self, event: FileEvent, dialogs: &dyn FileDialogs) -> Option<Status> {
        let status = match event {
            FileEvent::Opened { path, contents } => {
                log::info!("Opened {} ({} bytes)", path.display(), contents.len());
                self.document.replace(contents);
                self.remember(&path);
                Status::info(format!("Opened {}", file_helper::file_name(&path)))
            }
            FileEvent::Saved { path, bytes } => {
                log::info!("Saved {} ({} bytes)", path.display(), bytes);
                self.remember(&path);
                Status::info(format!(
                    "Saved {} ({} bytes)",
                    file_helper::file_name(&path),
                    bytes
                ))
            }
            FileEvent::Canceled => {
                log::debug!("Dialog canceled");
                return None;
            }
            FileEvent::Failed(error) => {
                log::warn!("{} ({:?}): {}", error.title(), error.kind(), error);
                dialogs.show_error(error.title(), &error.to_string());
                Status::error(format!(
                    "{}: {}",
                    error.title(),
                    file_helper::file_name(error.path())
                ))
            }
        };
        Some(status)
    }

    fn remember(&mut self, path: &Path) {
        if let Some(dir) = file_helper::parent_directory(path) {
            self.last_directory = Some(dir);
        }
    }
}
