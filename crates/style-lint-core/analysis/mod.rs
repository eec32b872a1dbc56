//! Stylesheet analysis
//!
//! Runs the lint rules over a stylesheet and keeps the results together with
//! the parsed view. Every call is a full recomputation: nothing is cached
//! between analyses and the input is never modified.
//!
//! # Example
//!
//! ```rust
//! use style_lint_core::analysis::StyleAnalysis;
//!
//! let analysis = StyleAnalysis::analyze("div { color: red; margin: 0; }");
//!
//! for issue in analysis.issues() {
//!     println!("{}: {}", issue.rule_id(), issue.message());
//! }
//! assert_eq!(analysis.findings().len(), 2);
//! ```

use crate::{parser::Stylesheet, Result};

pub mod linting;
pub mod specificity;
pub mod submission;

pub use linting::{
    lint_stylesheet, IssueCategory, IssueLocation, IssueSeverity, LintConfig, LintIssue, LintRule,
};
pub use specificity::{get_specificity, Specificity};
pub use submission::{validate_code_submission, CodeSubmission, Feedback, SUCCESS_MESSAGE};

/// Lint results for one stylesheet
#[derive(Debug, Clone)]
pub struct StyleAnalysis<'a> {
    /// Parsed view of the analysed text
    stylesheet: Stylesheet<'a>,

    /// Detected lint issues, grouped by category in reporting order
    issues: Vec<LintIssue<'a>>,
}

impl<'a> StyleAnalysis<'a> {
    /// Analyze stylesheet text with the default configuration
    ///
    /// Never fails: every rule runs and every issue is kept.
    #[must_use]
    pub fn analyze(source: &'a str) -> Self {
        let stylesheet = Stylesheet::parse(source);
        let issues = linting::run_rules(&stylesheet, &LintConfig::default());
        Self::finish(stylesheet, issues)
    }

    /// Analyze stylesheet text with a custom lint configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration names an unknown rule.
    pub fn analyze_with_config(source: &'a str, config: &LintConfig) -> Result<Self> {
        let stylesheet = Stylesheet::parse(source);
        let issues = lint_stylesheet(&stylesheet, config)?;
        Ok(Self::finish(stylesheet, issues))
    }

    /// Wrap up an analysis pass
    fn finish(stylesheet: Stylesheet<'a>, issues: Vec<LintIssue<'a>>) -> Self {
        log::debug!(
            "analysed {} selectors over {} lines: {} issues",
            stylesheet.selectors().len(),
            stylesheet.lines().len(),
            issues.len()
        );
        Self { stylesheet, issues }
    }

    /// All issues found, in reporting order
    #[must_use]
    pub fn issues(&self) -> &[LintIssue<'a>] {
        &self.issues
    }

    /// Issue messages, in reporting order
    #[must_use]
    pub fn findings(&self) -> Vec<&str> {
        self.issues.iter().map(LintIssue::message).collect()
    }

    /// Issues of a single category
    pub fn issues_in_category(
        &self,
        category: IssueCategory,
    ) -> impl Iterator<Item = &LintIssue<'a>> + '_ {
        self.issues
            .iter()
            .filter(move |issue| issue.category() == category)
    }

    /// Check whether any issue was found
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Parsed view of the analysed stylesheet
    #[must_use]
    pub const fn stylesheet(&self) -> &Stylesheet<'a> {
        &self.stylesheet
    }

    /// Owned feedback for display
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        Feedback::new(self.issues.iter().map(|issue| issue.message().to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stylesheet_has_no_issues() {
        let analysis = StyleAnalysis::analyze("");
        assert!(!analysis.has_issues());
        assert!(analysis.feedback().is_success());
    }

    #[test]
    fn categories_come_out_in_fixed_order() {
        let css = "Header {\n  color: #abc; margin: 0;\n}\n";
        let analysis = StyleAnalysis::analyze(css);
        let categories: Vec<_> = analysis.issues().iter().map(LintIssue::category).collect();

        assert_eq!(
            categories,
            vec![
                IssueCategory::SelectorNaming,
                IssueCategory::Specificity,
                IssueCategory::PropertyOrder,
                IssueCategory::ColorNaming,
            ]
        );
        assert_eq!(analysis.issues_in_category(IssueCategory::ColorNaming).count(), 1);
    }

    #[test]
    fn config_restricts_rules() {
        let config = LintConfig::default().with_enabled_rule("color-naming");
        let analysis =
            StyleAnalysis::analyze_with_config("Header {\n  color: #abc; margin: 0;\n}", &config)
                .unwrap();

        assert_eq!(
            analysis.findings(),
            vec!["Line 2: Hex color \"#abc\" should have a descriptive name."]
        );
    }

    #[test]
    fn unknown_rule_in_config_is_an_error() {
        let config = LintConfig::default().with_enabled_rule("colour-naming");
        assert!(StyleAnalysis::analyze_with_config("a {", &config).is_err());
    }

    #[test]
    fn stylesheet_view_is_kept() {
        let analysis = StyleAnalysis::analyze("a {\n}\n");
        assert_eq!(analysis.stylesheet().selectors().len(), 1);
        assert_eq!(analysis.stylesheet().lines().len(), 3);
    }
}
