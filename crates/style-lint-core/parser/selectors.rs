//! Selector extraction
//!
//! A selector is whatever non-`{` text precedes a `{`, trimmed. The scan is
//! global over the whole text, so a selector run may cross line breaks and
//! closing braces: in `a { x: y; }\nb { }` the second selector is
//! `x: y; }\nb`, not `b`. Rules downstream see exactly that text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything up to and including the next `{`, at least one character long
static SELECTOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([^{]+)\{").expect("selector pattern is valid")
});

/// A selector slice with its position in the selector sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<'a> {
    /// 1-based ordinal in extraction order
    index: usize,
    /// Trimmed selector text, borrowed from the stylesheet
    text: &'a str,
}

impl<'a> Selector<'a> {
    /// 1-based position in the selector sequence
    ///
    /// Reported to users as the selector's "line", even though it counts
    /// selectors rather than physical lines.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Trimmed selector text
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }
}

/// Extract every selector in `css`, in source order
///
/// # Example
///
/// ```rust
/// use style_lint_core::parser::extract_selectors;
///
/// let selectors = extract_selectors("card { }\n@media print {");
/// let texts: Vec<_> = selectors.iter().map(|s| s.text()).collect();
/// assert_eq!(texts, ["card", "}\n@media print"]);
/// ```
#[must_use]
pub fn extract_selectors(css: &str) -> Vec<Selector<'_>> {
    SELECTOR_PATTERN
        .captures_iter(css)
        .filter_map(|caps| caps.get(1))
        .enumerate()
        .map(|(index, prelude)| Selector {
            index: index + 1,
            text: prelude.as_str().trim(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(css: &str) -> Vec<&str> {
        extract_selectors(css).iter().map(Selector::text).collect()
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(extract_selectors("").is_empty());
        assert!(extract_selectors("no braces at all").is_empty());
    }

    #[test]
    fn single_rule() {
        let selectors = extract_selectors("  card__title--big  {\n  color: red;\n}\n");
        assert_eq!(selectors.len(), 1);
        assert_eq!(selectors[0].index(), 1);
        assert_eq!(selectors[0].text(), "card__title--big");
    }

    #[test]
    fn later_selectors_carry_previous_block() {
        let css = "a {\n  margin: 0;\n}\n\nb {\n}\n";
        assert_eq!(texts(css), vec!["a", "margin: 0;\n}\n\nb"]);
    }

    #[test]
    fn consecutive_braces_skip_empty_runs() {
        // the run between two adjacent braces is empty and never matches
        assert_eq!(texts("x{{y{"), vec!["x", "y"]);
        assert_eq!(texts("{a{"), vec!["a"]);
    }

    #[test]
    fn whitespace_only_run_gives_empty_selector() {
        let selectors = extract_selectors("a { } {");
        assert_eq!(selectors.len(), 2);
        assert_eq!(selectors[1].text(), "}");

        let selectors = extract_selectors(" {");
        assert_eq!(selectors.len(), 1);
        assert_eq!(selectors[0].text(), "");
    }

    #[test]
    fn braces_in_comments_still_split() {
        assert_eq!(texts("/* { */ a {"), vec!["/*", "*/ a"]);
    }

    #[test]
    fn grouped_and_at_rule_preludes_are_plain_selectors() {
        assert_eq!(
            texts("h1, h2 {\n}\n@media (max-width: 768px) {"),
            vec!["h1, h2", "}\n@media (max-width: 768px)"]
        );
    }

    #[test]
    fn indices_are_sequential() {
        let selectors = extract_selectors("a{}b{}c{}");
        let indices: Vec<_> = selectors.iter().map(Selector::index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }
}
