//! Selector naming convention rule.
//!
//! Selectors must be a lowercase block name, optionally followed by
//! `__element` and then `--modifier`, each made of lowercase ASCII letters
//! only. Anything else fails: combinators, pseudo-classes, attribute
//! selectors, grouped selectors, `#`/`.` prefixes, digits, uppercase and
//! single hyphens.

use crate::{
    analysis::linting::{IssueCategory, IssueLocation, IssueSeverity, LintIssue, LintRule},
    parser::Stylesheet,
    utils::Spans,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// `block`, `block__element`, `block--modifier` or `block__element--modifier`
static BEM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z]+)(?:__([a-z]+))?(?:--([a-z]+))?$").expect("naming pattern is valid")
});

/// Check a trimmed selector against the naming convention
///
/// # Example
///
/// ```rust
/// use style_lint_core::analysis::linting::rules::selector_naming::is_valid_selector;
///
/// assert!(is_valid_selector("card__title--active"));
/// assert!(!is_valid_selector(".card"));
/// ```
#[must_use]
pub fn is_valid_selector(selector: &str) -> bool {
    BEM_PATTERN.is_match(selector)
}

/// Rule for selectors that break the naming convention
pub struct SelectorNamingRule;

impl LintRule for SelectorNamingRule {
    fn id(&self) -> &'static str {
        "selector-naming"
    }

    fn name(&self) -> &'static str {
        "Selector Naming"
    }

    fn description(&self) -> &'static str {
        "Selectors should follow the lowercase block__element--modifier convention"
    }

    fn default_severity(&self) -> IssueSeverity {
        IssueSeverity::Warning
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::SelectorNaming
    }

    fn check_stylesheet<'a>(&self, sheet: &Stylesheet<'a>) -> Vec<LintIssue<'a>> {
        let spans = Spans::new(sheet.source());

        sheet
            .selectors()
            .iter()
            .filter(|selector| !is_valid_selector(selector.text()))
            .map(|selector| {
                let mut issue = LintIssue::new(
                    self.default_severity(),
                    self.category(),
                    self.id(),
                    format!(
                        "Invalid selector at line {}: \"{}\".",
                        selector.index(),
                        selector.text()
                    ),
                );
                if let Some(offset) = spans.span_offset(selector.text()) {
                    issue = issue.with_location(IssueLocation {
                        line: selector.index(),
                        offset,
                        span: selector.text(),
                    });
                }
                issue
            })
            .collect()
    }
}
