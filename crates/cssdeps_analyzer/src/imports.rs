use log::trace;
use once_cell::sync::Lazy;
use path_clean::clean;
use regex::Regex;
use std::path::Path;

use crate::types::ImportedFileSet;

// Side-effect style-sheet imports: import './a.css'; or import "../b.scss";
static STYLESHEET_IMPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import\s+['"](.*?\.s?css)['"];"#).unwrap());

/// Absolute paths of the style sheets `content` imports, resolved against
/// the component's directory.
pub fn extract_imported_files(content: &str, component_dir: &Path) -> ImportedFileSet {
    let mut imported = ImportedFileSet::new();

    for caps in STYLESHEET_IMPORT_RE.captures_iter(content) {
        let Some(request) = caps.get(1) else { continue };
        let resolved = clean(component_dir.join(request.as_str()));
        trace!("Resolved style-sheet import '{}' to {}", request.as_str(), resolved.display());
        imported.insert(resolved);
    }

    imported
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn imports(content: &str, dir: &str) -> Vec<PathBuf> {
        extract_imported_files(content, Path::new(dir)).iter().map(Path::to_path_buf).collect()
    }

    #[test]
    fn test_relative_import_is_resolved() {
        assert_eq!(
            imports("import './styles.css';", "/p/src"),
            vec![PathBuf::from("/p/src/styles.css")]
        );
    }

    #[test]
    fn test_parent_and_current_dir_segments_are_normalized() {
        let src = "import \"../shared/./theme.scss\";\nimport '../../base.css';";
        assert_eq!(
            imports(src, "/p/src/components"),
            vec![PathBuf::from("/p/src/shared/theme.scss"), PathBuf::from("/p/base.css")]
        );
    }

    #[test]
    fn test_duplicate_imports_collapse() {
        let src = "import './a.css';\nimport './A.css';\nimport './sub/../a.css';";
        assert_eq!(imports(src, "/p"), vec![PathBuf::from("/p/a.css")]);
    }

    #[test]
    fn test_non_stylesheet_and_unterminated_imports_are_ignored() {
        let src = "import './polyfills';\nimport './b.css'\nimport styles from './c.module.css';";
        assert!(imports(src, "/p").is_empty());
    }

    #[test]
    fn test_absolute_import_keeps_its_path() {
        assert_eq!(
            imports("import '/shared/reset.css';", "/p/src"),
            vec![PathBuf::from("/shared/reset.css")]
        );
    }
}
