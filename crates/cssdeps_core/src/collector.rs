use ignore::{DirEntry, WalkBuilder};
use log::{debug, trace, warn};
use std::path::{Component, Path, PathBuf};

use crate::constants::{IGNORED_DIRS, TEST_FILE_SUFFIXES};

pub struct CollectorConfig {
    pub root: PathBuf,
    /// Honour `.gitignore` and `.ignore` files found during the walk
    pub respect_gitignore: bool,
}

/// Walks `cfg.root` and returns every file outside the ignored directories,
/// skipping component test files.
///
/// Walk errors are logged and the affected subtree is skipped; they never
/// abort the enumeration of sibling subtrees.
pub fn collect_files(cfg: &CollectorConfig) -> Vec<PathBuf> {
    debug!("Collecting files");
    let mut files: Vec<PathBuf> = Vec::new();
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .standard_filters(cfg.respect_gitignore)
        .hidden(false)
        .filter_entry(|dent| !is_ignored_entry(dent))
        .build();

    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                warn!("Error enumerating files under {}: {}", root.display(), e);
                continue;
            }
        };
        if !dent.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let p = dent.path();
        if is_test_file(p) {
            trace!("Skipping test file: {}", p.display());
            continue;
        }

        trace!("Found file: {}", p.display());
        files.push(p.to_path_buf());
    }
    debug!("Collected {} files", files.len());
    files
}

fn is_ignored_entry(dent: &DirEntry) -> bool {
    // The root itself is always walked, whatever its name.
    if dent.depth() == 0 || !dent.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    let ignored = dent.file_name().to_str().is_some_and(is_ignored_dir_name);
    if ignored {
        trace!("Pruning ignored directory: {}", dent.path().display());
    }
    ignored
}

pub fn is_ignored_dir_name(name: &str) -> bool {
    IGNORED_DIRS.contains(&name)
}

/// Whether any directory between `root` and `path` carries an ignored name.
pub fn is_under_ignored_dir(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut dirs = rel.components();
    // The last component is the file name.
    dirs.next_back();
    dirs.any(|c| match c {
        Component::Normal(name) => name.to_str().is_some_and(is_ignored_dir_name),
        _ => false,
    })
}

pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| TEST_FILE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Case-insensitive extension check against a list of lowercase extensions.
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.contains(&ext.to_ascii_lowercase().as_str()))
}
