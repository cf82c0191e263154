use cssdeps_core::{FileSystem, STYLESHEET_EXTENSIONS, has_extension};
use dashmap::DashMap;
use log::{debug, info, trace, warn};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use std::{
    collections::{BTreeSet, HashMap},
    path::{Path, PathBuf},
};

use crate::types::class_key;

// A class selector directly followed (after optional whitespace) by `,` or `{`.
// The trailing delimiter is consumed rather than looked ahead at; it can never
// start another match, so the set of matches is unchanged.
static CSS_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([a-zA-Z0-9_-]+)\s*[,{]").unwrap());

/// Class names defined by selectors in `content`, in source order.
pub fn extract_defined_classes(content: &str) -> impl Iterator<Item = &str> {
    CSS_CLASS_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
}

/// Concurrent accumulator for class definitions.
///
/// Writers for distinct class names proceed in parallel; writers for the same
/// name are serialized by the map's shard lock and merged as a set union.
#[derive(Debug, Default)]
pub struct ClassIndexBuilder {
    classes: DashMap<String, BTreeSet<PathBuf>>,
}

impl ClassIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_definition(&self, class_name: &str, file: &Path) {
        self.classes.entry(class_key(class_name)).or_default().insert(file.to_path_buf());
    }

    /// Records every class selector in `content` as defined by `file`.
    /// Returns the number of selector matches.
    pub fn add_stylesheet(&self, file: &Path, content: &str) -> usize {
        let mut matches = 0;
        for class_name in extract_defined_classes(content) {
            trace!("Found class definition '.{}' in {}", class_name, file.display());
            self.add_definition(class_name, file);
            matches += 1;
        }
        matches
    }

    /// Freezes the accumulated definitions into a read-only index.
    pub fn finish(self) -> ClassIndex {
        ClassIndex { classes: self.classes.into_iter().collect() }
    }
}

/// Read-only mapping from class name to the style sheets defining it.
///
/// Lookups are case-insensitive; defining files are kept in path order so
/// results do not depend on which worker indexed a file first.
#[derive(Debug, Default)]
pub struct ClassIndex {
    classes: HashMap<String, BTreeSet<PathBuf>>,
}

impl ClassIndex {
    pub fn defining_files(&self, class_name: &str) -> Option<&BTreeSet<PathBuf>> {
        self.classes.get(&class_key(class_name))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Indexes the given style sheets in parallel.
///
/// Unreadable files are logged and skipped. The parallel join completes
/// before the builder is frozen, so the returned index is whole.
pub fn index_stylesheets(stylesheets: &[PathBuf], fs: &dyn FileSystem) -> ClassIndex {
    info!("Indexing {} style sheets in parallel", stylesheets.len());
    let builder = ClassIndexBuilder::new();

    let definitions: usize = stylesheets
        .par_iter()
        .map(|file| match fs.read_to_string(file) {
            Ok(content) => {
                let found = builder.add_stylesheet(file, &content);
                debug!("Found {} class definitions in {}", found, file.display());
                found
            }
            Err(e) => {
                warn!("Error processing CSS file {}: {}", file.display(), e);
                0
            }
        })
        .sum();

    let index = builder.finish();
    info!("Indexed {} class definitions ({} distinct classes)", definitions, index.len());
    index
}

/// Enumerates `root` and indexes every style sheet found.
pub fn build_index(root: &Path, fs: &dyn FileSystem) -> ClassIndex {
    let stylesheets: Vec<PathBuf> = fs
        .files_recursive(root)
        .into_iter()
        .filter(|f| has_extension(f, STYLESHEET_EXTENSIONS))
        .collect();
    index_stylesheets(&stylesheets, fs)
}
