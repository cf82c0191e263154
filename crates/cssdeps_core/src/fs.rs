use anyhow::{Context, Result, anyhow};
use log::{debug, trace};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::collector::{CollectorConfig, collect_files, is_test_file, is_under_ignored_dir};

/// Storage access used by the analysis.
///
/// Implementations must be shareable across worker threads; both methods are
/// called concurrently during indexing and resolution.
pub trait FileSystem: Send + Sync {
    /// Every file under `root`, with ignored directories and test files removed.
    fn files_recursive(&self, root: &Path) -> Vec<PathBuf>;

    /// Full contents of `path` as text.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Case-folded identity of a path, used wherever paths are compared.
pub fn path_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct DiskFileSystem {
    respect_gitignore: bool,
}

impl DiskFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.respect_gitignore = yes;
        self
    }
}

impl FileSystem for DiskFileSystem {
    fn files_recursive(&self, root: &Path) -> Vec<PathBuf> {
        collect_files(&CollectorConfig {
            root: root.to_path_buf(),
            respect_gitignore: self.respect_gitignore,
        })
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        trace!("Reading {}", path.display());
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// In-memory file tree, keyed case-insensitively.
///
/// Enumeration applies the same directory and test-file exclusions as
/// [`DiskFileSystem`], so it can stand in for a real project tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: HashMap<String, (PathBuf, String)>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        self.files.insert(path_key(&path), (path, content.into()));
    }
}

/// `path` relative to `root`, matching root components case-insensitively.
fn strip_root(root: &Path, path: &Path) -> Option<PathBuf> {
    let mut rest = path.components();
    for want in root.components() {
        let got = rest.next()?;
        if got.as_os_str().to_string_lossy().to_lowercase()
            != want.as_os_str().to_string_lossy().to_lowercase()
        {
            return None;
        }
    }
    Some(rest.as_path().to_path_buf())
}

impl FileSystem for MemoryFileSystem {
    fn files_recursive(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .files
            .values()
            .map(|(path, _)| path)
            .filter(|path| {
                strip_root(root, path).is_some_and(|rel| {
                    !is_under_ignored_dir(Path::new(""), &rel) && !is_test_file(&rel)
                })
            })
            .cloned()
            .collect();
        files.sort();
        debug!("Collected {} in-memory files under {}", files.len(), root.display());
        files
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .get(&path_key(path))
            .map(|(_, content)| content.clone())
            .ok_or_else(|| anyhow!("File not found: {}", path.display()))
    }
}
