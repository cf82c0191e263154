use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::Result;
use colored::Colorize;
use log::{debug, trace};

use crate::types::AnalysisResult;

/// Path shown to the user: relative to `root` when inside it, else as-is.
fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).to_string_lossy().to_string()
}

pub fn print_no_missing_imports_message<W: Write>(writer: &mut W) -> io::Result<()> {
    debug!("No missing style-sheet imports");
    writeln!(writer, "{} No missing style-sheet imports.", "✓".green().bold())?;
    writer.flush()?;
    Ok(())
}

pub fn print_report_tree<W: Write>(
    writer: &mut W,
    results: &[AnalysisResult],
    root: &Path,
) -> io::Result<()> {
    debug!("Printing report tree for {} components", results.len());

    writeln!(
        writer,
        "{} Components using classes from style sheets they do not import\n",
        "⚠".yellow().bold()
    )?;

    for result in results {
        trace!("Printing component: {}", result.file.display());
        writeln!(
            writer,
            "{} ({} missing)",
            display_path(root, &result.file).bright_white().bold(),
            result.required_css_files.len().to_string().red()
        )?;

        for (idx, required) in result.required_css_files.iter().enumerate() {
            let is_last = idx == result.required_css_files.len() - 1;
            let prefix = if is_last { "└──" } else { "├──" };

            writeln!(
                writer,
                "{}  {} {}",
                prefix.dimmed(),
                display_path(root, &required.file).blue(),
                format!("[{}]", required.classes_used.join(", ")).dimmed()
            )?;
        }

        writeln!(writer)?;
    }

    print_summary(writer, results, root)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(
    writer: &mut W,
    results: &[AnalysisResult],
    root: &Path,
) -> io::Result<()> {
    if results.is_empty() {
        return Ok(());
    }

    let total_missing: usize = results.iter().map(|r| r.required_css_files.len()).sum();

    // Top 5 components by number of missing style sheets; sort is stable so
    // ties keep path order.
    let mut top_offenders: Vec<_> = results.iter().collect();
    top_offenders.sort_by(|a, b| b.required_css_files.len().cmp(&a.required_css_files.len()));
    top_offenders.truncate(5);

    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Components affected: {}", results.len().to_string().yellow().bold())?;
    writeln!(writer, "  Missing imports: {}", total_missing.to_string().red().bold())?;

    writeln!(writer, "  Top {} offenders:", top_offenders.len())?;
    for (idx, result) in top_offenders.iter().enumerate() {
        writeln!(
            writer,
            "    {}. {} ({} style sheets)",
            idx + 1,
            display_path(root, &result.file).blue(),
            result.required_css_files.len().to_string().red()
        )?;
    }

    Ok(())
}

/// Writes the results as a pretty-printed JSON array of absolute paths.
pub fn print_report_json<W: Write>(writer: &mut W, results: &[AnalysisResult]) -> Result<()> {
    debug!("Printing JSON report for {} components", results.len());
    serde_json::to_writer_pretty(&mut *writer, results)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RequiredFile, UsedClassSet};
    use std::path::PathBuf;

    /// `required` pairs a style sheet with its space-separated classes.
    fn result(file: &str, required: &[(&str, &str)]) -> AnalysisResult {
        let mut used_classes = UsedClassSet::new();
        let required_css_files = required
            .iter()
            .map(|&(css, classes)| {
                let classes_used: Vec<String> =
                    classes.split_whitespace().map(str::to_string).collect();
                for c in &classes_used {
                    used_classes.insert(c);
                }
                RequiredFile { file: PathBuf::from(css), classes_used }
            })
            .collect();
        AnalysisResult { file: PathBuf::from(file), used_classes, required_css_files }
    }

    fn render_tree(results: &[AnalysisResult]) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_report_tree(&mut out, results, Path::new("/project")).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_display_path_relative_to_root() {
        let root = Path::new("/project");
        assert_eq!(display_path(root, Path::new("/project/src/App.tsx")), "src/App.tsx");
        assert_eq!(display_path(root, Path::new("/elsewhere/a.css")), "/elsewhere/a.css");
    }

    #[test]
    fn test_tree_lists_required_files_with_classes() {
        let results = vec![result(
            "/project/src/Card.tsx",
            &[("/project/styles/card.css", "card title"), ("/project/base.css", "row")],
        )];

        let out = render_tree(&results);
        assert!(out.contains("src/Card.tsx (2 missing)"));
        assert!(out.contains("├──  styles/card.css [card, title]"));
        assert!(out.contains("└──  base.css [row]"));
        assert!(out.contains("Components affected: 1"));
        assert!(out.contains("Missing imports: 2"));
    }

    #[test]
    fn test_summary_orders_offenders_by_missing_count() {
        let results = vec![
            result("/project/A.tsx", &[("/project/a.css", "a")]),
            result("/project/B.tsx", &[("/project/a.css", "a"), ("/project/b.css", "b")]),
        ];

        let out = render_tree(&results);
        let b = out.find("1. B.tsx").unwrap();
        let a = out.find("2. A.tsx").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_no_missing_imports_message() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_no_missing_imports_message(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No missing style-sheet imports."));
    }

    #[test]
    fn test_json_report_uses_absolute_paths() {
        let results = vec![result("/project/A.tsx", &[("/project/a.css", "a")])];
        let mut out = Vec::new();
        print_report_json(&mut out, &results).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["file"], "/project/A.tsx");
        assert_eq!(json[0]["requiredCssFiles"][0]["file"], "/project/a.css");
        assert_eq!(json[0]["requiredCssFiles"][0]["classesUsed"], serde_json::json!(["a"]));
    }
}
