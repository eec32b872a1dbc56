//! Low selector specificity rule.

use crate::{
    analysis::{
        linting::{IssueCategory, IssueLocation, IssueSeverity, LintIssue, LintRule},
        specificity::Specificity,
    },
    parser::Stylesheet,
    utils::Spans,
};

/// Rule for selectors whose specificity estimate is below 10
///
/// Uses the crude estimate from [`Specificity`]; there is no upper bound
/// check and no distinction between rule types.
pub struct LowSpecificityRule;

impl LintRule for LowSpecificityRule {
    fn id(&self) -> &'static str {
        "low-specificity"
    }

    fn name(&self) -> &'static str {
        "Low Specificity"
    }

    fn description(&self) -> &'static str {
        "Selectors should score at least 10 on the specificity estimate"
    }

    fn default_severity(&self) -> IssueSeverity {
        IssueSeverity::Info
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::Specificity
    }

    fn check_stylesheet<'a>(&self, sheet: &Stylesheet<'a>) -> Vec<LintIssue<'a>> {
        let spans = Spans::new(sheet.source());
        let mut issues = Vec::new();

        for selector in sheet.selectors() {
            let specificity = Specificity::of(selector.text());
            if !specificity.is_low() {
                continue;
            }

            let mut issue = LintIssue::new(
                self.default_severity(),
                self.category(),
                self.id(),
                format!(
                    "Low specificity at line {}: \"{}\" has a specificity of {}.",
                    selector.index(),
                    selector.text(),
                    specificity.score()
                ),
            );
            if let Some(offset) = spans.span_offset(selector.text()) {
                issue = issue.with_location(IssueLocation {
                    line: selector.index(),
                    offset,
                    span: selector.text(),
                });
            }
            issues.push(issue);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(css: &str) -> Vec<String> {
        let sheet = Stylesheet::parse(css);
        LowSpecificityRule
            .check_stylesheet(&sheet)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn rule_metadata_correct() {
        let rule = LowSpecificityRule;
        assert_eq!(rule.id(), "low-specificity");
        assert_eq!(rule.default_severity(), IssueSeverity::Info);
        assert_eq!(rule.category(), IssueCategory::Specificity);
    }

    #[test]
    fn element_selector_flagged() {
        assert_eq!(
            messages("div {"),
            vec!["Low specificity at line 1: \"div\" has a specificity of 1.".to_string()]
        );
    }

    #[test]
    fn id_and_class_selectors_pass() {
        assert!(messages("#header {").is_empty());
        assert!(messages(".card {").is_empty());
    }

    #[test]
    fn zero_score_reported() {
        assert_eq!(
            messages("* {"),
            vec!["Low specificity at line 1: \"*\" has a specificity of 0.".to_string()]
        );
    }

    #[test]
    fn carried_declarations_raise_score() {
        // the second selector carries the previous block: "padding" and "main"
        let css = "#app {\n  padding: 0;\n}\n\nmain {\n}";
        assert_eq!(
            messages(css),
            vec!["Low specificity at line 2: \"padding: 0;\n}\n\nmain\" has a specificity of 2.".to_string()]
        );
    }
}
