use anyhow::Result;
use cssdeps_core::{
    COMPONENT_EXTENSIONS, DiskFileSystem, FileSystem, STYLESHEET_EXTENSIONS, has_extension,
};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{
    path::{Path, PathBuf},
    thread,
};

use crate::{
    config::Config,
    imports::extract_imported_files,
    index::{ClassIndex, index_stylesheets},
    resolver::resolve_required_files,
    types::{AnalysisResult, CheckResult},
    usage::extract_used_classes,
};

pub fn run_css_dependency_check(mut cfg: Config) -> Result<CheckResult> {
    info!("Starting CSS dependency check");

    cfg.initialize()?;
    let root = cfg.root()?;

    let fs = DiskFileSystem::new().respect_gitignore(cfg.respect_gitignore);
    Ok(analyze(root, &fs))
}

/// Indexes every style sheet under `root`, then resolves every component
/// against the finished index.
///
/// Individual unreadable files are logged and skipped; the run itself
/// cannot fail.
pub fn analyze(root: &Path, fs: &dyn FileSystem) -> CheckResult {
    let files = fs.files_recursive(root);
    let stylesheets: Vec<PathBuf> =
        files.iter().filter(|f| has_extension(f, STYLESHEET_EXTENSIONS)).cloned().collect();
    let components: Vec<PathBuf> =
        files.iter().filter(|f| has_extension(f, COMPONENT_EXTENSIONS)).cloned().collect();
    info!("Found {} style sheets and {} components", stylesheets.len(), components.len());

    let index = index_stylesheets(&stylesheets, fs);
    let results = analyze_components(&components, &index, fs);

    info!("CSS dependency check complete. {} components need imports", results.len());
    CheckResult {
        root: root.to_path_buf(),
        results,
        components_analyzed: components.len(),
        stylesheets_indexed: stylesheets.len(),
        classes_indexed: index.len(),
    }
}

/// Resolves each component in parallel and keeps those with required files,
/// sorted by path.
pub fn analyze_components(
    components: &[PathBuf],
    index: &ClassIndex,
    fs: &dyn FileSystem,
) -> Vec<AnalysisResult> {
    info!("Processing {} component files in parallel", components.len());

    let mut results: Vec<AnalysisResult> = components
        .par_iter()
        .filter_map(|file| {
            let thread_id = thread::current().id();
            debug!("Thread {:?} processing: {}", thread_id, file.display());

            match analyze_component(file, index, fs) {
                Ok(result) => result,
                Err(e) => {
                    warn!("Error processing component file {}: {}", file.display(), e);
                    None
                }
            }
        })
        .collect();

    results.sort_by(|a, b| a.file.cmp(&b.file));
    results
}

/// Analyzes one component. Returns `None` when it uses no classes or every
/// class it uses is already covered.
pub fn analyze_component(
    file: &Path,
    index: &ClassIndex,
    fs: &dyn FileSystem,
) -> Result<Option<AnalysisResult>> {
    let content = fs.read_to_string(file)?;

    let used_classes = extract_used_classes(&content);
    if used_classes.is_empty() {
        trace!("No class usages in {}", file.display());
        return Ok(None);
    }

    let Some(component_dir) = file.parent() else {
        return Ok(None);
    };
    let imported = extract_imported_files(&content, component_dir);
    debug!(
        "{} uses {} classes and imports {} style sheets",
        file.display(),
        used_classes.len(),
        imported.len()
    );

    let required_css_files = resolve_required_files(file, &used_classes, index, &imported);
    if required_css_files.is_empty() {
        return Ok(None);
    }

    Ok(Some(AnalysisResult { file: file.to_path_buf(), used_classes, required_css_files }))
}
