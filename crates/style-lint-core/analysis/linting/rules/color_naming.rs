//! Hex color naming rule.
//!
//! Literal hex colors in `color` and `background-color` declarations should
//! embed a descriptive token. Named colors, `rgb()`, `hsl()` and variables
//! are never checked. No token is spelled with hex digits alone, so in
//! practice every literal hex color is reported.

use crate::{
    analysis::linting::{IssueCategory, IssueLocation, IssueSeverity, LintIssue, LintRule},
    parser::{color_values, Stylesheet},
    utils::Spans,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens accepted as a descriptive color name (case-sensitive substrings)
pub const DESCRIPTIVE_COLOR_TOKENS: [&str; 17] = [
    "red",
    "green",
    "blue",
    "yellow",
    "orange",
    "purple",
    "black",
    "white",
    "gray",
    "light",
    "dark",
    "primary",
    "secondary",
    "success",
    "danger",
    "warning",
    "info",
];

/// Strict 3- or 6-digit hex color
static HEX_COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color pattern is valid")
});

/// Check whether `value` is a literal 3- or 6-digit hex color
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_PATTERN.is_match(value)
}

/// Check whether the color, without its `#`, contains a descriptive token
///
/// # Example
///
/// ```rust
/// use style_lint_core::analysis::linting::rules::color_naming::has_descriptive_name;
///
/// assert!(has_descriptive_name("#dark000"));
/// assert!(!has_descriptive_name("#ff0000"));
/// ```
#[must_use]
pub fn has_descriptive_name(color: &str) -> bool {
    let digits = color.replacen('#', "", 1);
    DESCRIPTIVE_COLOR_TOKENS
        .iter()
        .any(|token| digits.contains(token))
}

/// Rule for hex colors without a descriptive name
pub struct ColorNamingRule;

impl LintRule for ColorNamingRule {
    fn id(&self) -> &'static str {
        "color-naming"
    }

    fn name(&self) -> &'static str {
        "Color Naming"
    }

    fn description(&self) -> &'static str {
        "Hex colors should carry a descriptive name"
    }

    fn default_severity(&self) -> IssueSeverity {
        IssueSeverity::Hint
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::ColorNaming
    }

    fn check_stylesheet<'a>(&self, sheet: &Stylesheet<'a>) -> Vec<LintIssue<'a>> {
        let spans = Spans::new(sheet.source());
        let mut issues = Vec::new();

        for line in sheet.lines() {
            for value in color_values(line.text()) {
                if !is_hex_color(value) || has_descriptive_name(value) {
                    continue;
                }

                let mut issue = LintIssue::new(
                    self.default_severity(),
                    self.category(),
                    self.id(),
                    format!(
                        "Line {}: Hex color \"{value}\" should have a descriptive name.",
                        line.number()
                    ),
                );
                if let Some(offset) = spans.span_offset(value) {
                    issue = issue.with_location(IssueLocation {
                        line: line.number(),
                        offset,
                        span: value,
                    });
                }
                issues.push(issue);
            }
        }

        issues
    }
}
