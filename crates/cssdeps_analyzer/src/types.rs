use cssdeps_core::path_key;
use serde::Serialize;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// Case-folded identity of a class name.
pub(crate) fn class_key(name: &str) -> String {
    name.to_lowercase()
}

/// Class names referenced by one component.
///
/// Membership is case-insensitive; the first spelling seen is the one kept,
/// and iteration follows first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedClassSet {
    names: Vec<String>,
    keys: HashSet<String>,
}

impl UsedClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when a class with the same case-folded name is already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if !self.keys.insert(class_key(name)) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&class_key(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Style-sheet paths a component imports explicitly, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ImportedFileSet {
    files: Vec<PathBuf>,
    keys: HashSet<String>,
}

impl ImportedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: PathBuf) -> bool {
        if !self.keys.insert(path_key(&file)) {
            return false;
        }
        self.files.push(file);
        true
    }

    pub fn contains(&self, file: &Path) -> bool {
        self.keys.contains(&path_key(file))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A style sheet a component depends on without importing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredFile {
    pub file: PathBuf,
    /// The component's classes this file defines
    pub classes_used: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub file: PathBuf,
    #[serde(skip)]
    pub used_classes: UsedClassSet,
    pub required_css_files: Vec<RequiredFile>,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Resolved directory the analysis ran over
    pub root: PathBuf,
    /// Components with at least one required style sheet, sorted by path
    pub results: Vec<AnalysisResult>,
    pub components_analyzed: usize,
    pub stylesheets_indexed: usize,
    pub classes_indexed: usize,
}
