//! Declaration order rule.
//!
//! Compares adjacent property names declared on the same physical line
//! against a canonical group order. Only same-line declarations are
//! compared; a block written one declaration per line is never checked
//! across line breaks. Lines starting with `}` are skipped.

use crate::{
    analysis::linting::{IssueCategory, IssueLocation, IssueSeverity, LintIssue, LintRule},
    parser::{property_names, Stylesheet},
    utils::Spans,
};

/// Canonical property group order
///
/// Entries ending in `-*` stand for their whole group (`margin-*` covers
/// `margin`). Hyphenated entries without the wildcard (`z-index`,
/// `box-sizing`, ..) can never match, since groups are cut at the first `-`.
pub const PROPERTY_ORDER: [&str; 48] = [
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "display",
    "flex",
    "flex-*",
    "grid",
    "grid-*",
    "box-sizing",
    "width",
    "height",
    "margin",
    "margin-*",
    "padding",
    "padding-*",
    "border",
    "border-*",
    "background",
    "background-*",
    "color",
    "font",
    "font-*",
    "text-*",
    "transition",
    "transition-*",
    "transform",
    "transform-*",
    "animation",
    "animation-*",
    "opacity",
    "z-index",
    "cursor",
    "overflow",
    "overflow-*",
    "box-shadow",
    "outline",
    "outline-*",
    "list-style",
    "list-style-*",
    "table-layout",
    "caption-side",
    "quotes",
    "counter-*",
    "resize",
    "user-select",
    "nav-*",
];

/// Canonical group of a property: the text before its first `-`
#[must_use]
pub fn property_group(property: &str) -> &str {
    property.split('-').next().unwrap_or_default()
}

/// Position of a property's group in [`PROPERTY_ORDER`], if listed
///
/// # Example
///
/// ```rust
/// use style_lint_core::analysis::linting::rules::property_order::canonical_index;
///
/// assert_eq!(canonical_index("margin-top"), canonical_index("margin"));
/// assert!(canonical_index("color") > canonical_index("margin"));
/// assert_eq!(canonical_index("z-index"), None);
/// ```
#[must_use]
pub fn canonical_index(property: &str) -> Option<usize> {
    let group = property_group(property);
    PROPERTY_ORDER
        .iter()
        .position(|entry| *entry == group || entry.strip_suffix("-*") == Some(group))
}

/// Rule for same-line declarations out of canonical order
pub struct PropertyOrderRule;

impl LintRule for PropertyOrderRule {
    fn id(&self) -> &'static str {
        "property-order"
    }

    fn name(&self) -> &'static str {
        "Property Order"
    }

    fn description(&self) -> &'static str {
        "Declarations on one line should follow the canonical property order"
    }

    fn default_severity(&self) -> IssueSeverity {
        IssueSeverity::Hint
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::PropertyOrder
    }

    fn check_stylesheet<'a>(&self, sheet: &Stylesheet<'a>) -> Vec<LintIssue<'a>> {
        let spans = Spans::new(sheet.source());
        let mut issues = Vec::new();

        for line in sheet.lines() {
            if line.text().starts_with('}') {
                continue;
            }

            let names = property_names(line.text());
            for pair in names.windows(2) {
                let [current, next] = [pair[0], pair[1]];
                let (Some(current_index), Some(next_index)) =
                    (canonical_index(current), canonical_index(next))
                else {
                    continue;
                };

                if current_index <= next_index {
                    continue;
                }

                let mut issue = LintIssue::new(
                    self.default_severity(),
                    self.category(),
                    self.id(),
                    format!(
                        "Line {}: The property \"{next}\" should be declared before \"{current}\".",
                        line.number()
                    ),
                )
                .with_suggested_fix(format!("Move \"{next}\" in front of \"{current}\""));

                if let Some(offset) = spans.span_offset(next) {
                    issue = issue.with_location(IssueLocation {
                        line: line.number(),
                        offset,
                        span: next,
                    });
                }
                issues.push(issue);
            }
        }

        issues
    }
}
