use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::UsedClassSet;

// Matches className="a b", className='a b', className={"a b"} and className={'a b'}.
static CLASS_NAME_USAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"className\s*=\s*(?:\{?\s*)?["']([^"'}]+)["']"#).unwrap());

const CLASS_SEPARATORS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Collects the class names assigned through literal `className` attributes.
///
/// Expressions such as template literals or `clsx(...)` calls are not
/// evaluated; only quoted string values contribute.
pub fn extract_used_classes(content: &str) -> UsedClassSet {
    let mut used = UsedClassSet::new();

    for caps in CLASS_NAME_USAGE_RE.captures_iter(content) {
        let Some(value) = caps.get(1) else { continue };
        for token in value.as_str().split(CLASS_SEPARATORS) {
            let token = token.trim();
            if !token.is_empty() && used.insert(token) {
                trace!("Found class usage '{}'", token);
            }
        }
    }

    used
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(content: &str) -> Vec<String> {
        extract_used_classes(content).iter().map(str::to_string).collect()
    }

    #[test]
    fn test_double_quoted_attribute() {
        assert_eq!(
            classes(r#"<div className="testClass testclass1">Hello World</div>"#),
            vec!["testClass", "testclass1"]
        );
    }

    #[test]
    fn test_single_quoted_attribute() {
        assert_eq!(classes("<span className='missingClass'>Test</span>"), vec!["missingClass"]);
    }

    #[test]
    fn test_braced_string_literal() {
        assert_eq!(classes(r#"<p className={"lead muted"} />"#), vec!["lead", "muted"]);
        assert_eq!(classes("<p className={ 'lead' } />"), vec!["lead"]);
    }

    #[test]
    fn test_whitespace_around_equals_and_multiline_values() {
        let src = "<div\n  className = \"row\n    \tgutter  \"\n/>";
        assert_eq!(classes(src), vec!["row", "gutter"]);
    }

    #[test]
    fn test_occurrences_accumulate_and_collapse_case_insensitively() {
        let src = r#"<a className="btn primary" /><b className="BTN secondary" />"#;
        assert_eq!(classes(src), vec!["btn", "primary", "secondary"]);
    }

    #[test]
    fn test_dynamic_expressions_are_not_resolved() {
        let src = "<div className={styles.card} /><div className={`a ${b}`} />";
        assert!(extract_used_classes(src).is_empty());
    }

    #[test]
    fn test_class_attribute_is_not_class_name() {
        assert!(extract_used_classes(r#"<div class="legacy" />"#).is_empty());
    }
}
