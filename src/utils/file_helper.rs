//! Path helpers for status messages and dialog start directories.

use std::path::{Path, PathBuf};

/// File name for display, or the whole path if it has none.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parent directory of a path. `None` for bare file names and roots.
pub fn parent_directory(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("/path/to/file.txt")), "file.txt");
        assert_eq!(file_name(Path::new("/")), "/");
    }

    #[test]
    fn test_parent_directory() {
        assert_eq!(
            parent_directory(Path::new("/path/to/file.txt")),
            Some(PathBuf::from("/path/to"))
        );
        assert_eq!(parent_directory(Path::new("file.txt")), None);
        assert_eq!(parent_directory(Path::new("/")), None);
    }
}
