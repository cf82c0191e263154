//! Implicit style-sheet dependency detection for React projects.
//!
//! This crate indexes the class selectors defined by every `.css`/`.scss`
//! file in a tree, scans `.tsx`/`.jsx` components for the class names their
//! `className` attributes use, and reports the style sheets each component
//! relies on without importing them.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use cssdeps_analyzer::{Config, run_css_dependency_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::new("/path/to/project");
//! let result = run_css_dependency_check(cfg)?;
//!
//! if !result.results.is_empty() {
//!     // Use buffered output for better performance
//!     let mut stdout = BufWriter::new(std::io::stdout());
//!     cssdeps_analyzer::print_report_json(&mut stdout, &result.results)?;
//!     stdout.flush()?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## In-memory trees
//!
//! ```
//! use cssdeps_analyzer::analyze;
//! use cssdeps_core::MemoryFileSystem;
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("/app/styles.css", ".btn { }")
//!     .with_file("/app/Button.tsx", r#"<button className="btn" />"#);
//!
//! let result = analyze(Path::new("/app"), &fs);
//! assert_eq!(result.results.len(), 1);
//! ```

mod checker;
mod config;
mod imports;
mod index;
mod reporter;
mod resolver;
mod types;
mod usage;

// Re-export public API
pub use checker::{analyze, analyze_component, analyze_components, run_css_dependency_check};
pub use config::{Config, OutputFormat};
pub use imports::extract_imported_files;
pub use index::{
    ClassIndex, ClassIndexBuilder, build_index, extract_defined_classes, index_stylesheets,
};
pub use reporter::{print_no_missing_imports_message, print_report_json, print_report_tree};
pub use resolver::resolve_required_files;
pub use types::{AnalysisResult, CheckResult, ImportedFileSet, RequiredFile, UsedClassSet};
pub use usage::extract_used_classes;
