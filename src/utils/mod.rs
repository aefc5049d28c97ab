//! Utility modules for path handling.

pub mod file_helper;
