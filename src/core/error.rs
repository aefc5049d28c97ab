//! Error types for file operations.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Title of the error box shown when Open fails.
pub const READ_ERROR_TITLE: &str = "An error occurred reading the file";

/// Title of the error box shown when Save fails.
pub const WRITE_ERROR_TITLE: &str = "An error occurred saving the file";

/// A failed read or write. `Display` is the reason shown to the user.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("{source}: '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source}: '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Fixed dialog title for this kind of failure.
    pub fn title(&self) -> &'static str {
        match self {
            FileError::Read { .. } => READ_ERROR_TITLE,
            FileError::Write { .. } => WRITE_ERROR_TITLE,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FileError::Read { path, .. } | FileError::Write { path, .. } => path,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            FileError::Read { source, .. } | FileError::Write { source, .. } => source.kind(),
        }
    }
}

pub type FileResult<T> = Result<T, FileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_follow_operation() {
        let read = FileError::Read {
            path: PathBuf::from("/tmp/a.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let write = FileError::Write {
            path: PathBuf::from("/tmp/a.txt"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(read.title(), READ_ERROR_TITLE);
        assert_eq!(write.title(), WRITE_ERROR_TITLE);
        assert_eq!(write.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_message_names_reason_and_path() {
        let err = FileError::Read {
            path: PathBuf::from("/tmp/missing.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let message = err.to_string();
        assert!(message.contains("permission denied"));
        assert!(message.contains("/tmp/missing.txt"));
    }
}
