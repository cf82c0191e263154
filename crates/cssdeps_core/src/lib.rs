//! Core utilities for cssdeps tools.
//!
//! This crate provides the storage layer shared by the analyzers:
//! - Enumerating project files while pruning dependency caches, build output
//!   and version-control metadata
//! - Classifying files as style sheets, components or tests
//! - A [`FileSystem`] abstraction with disk-backed and in-memory implementations

mod collector;
mod constants;
mod fs;

// Re-export public API
pub use collector::{
    CollectorConfig, collect_files, has_extension, is_ignored_dir_name, is_test_file,
    is_under_ignored_dir,
};
pub use constants::{COMPONENT_EXTENSIONS, IGNORED_DIRS, STYLESHEET_EXTENSIONS, TEST_FILE_SUFFIXES};
pub use fs::{DiskFileSystem, FileSystem, MemoryFileSystem, path_key};
