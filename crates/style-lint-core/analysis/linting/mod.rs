//! Linting for stylesheets
//!
//! Each heuristic check is a [`LintRule`]. Rules run against a
//! [`Stylesheet`] and report [`LintIssue`]s carrying the user-facing
//! message, a severity, a category and the position the message refers to.
//!
//! # Built-in Rules
//!
//! - `selector-naming`: selectors must follow lowercase `block__element--modifier`
//! - `low-specificity`: selectors scoring under 10 on the specificity estimate
//! - `property-order`: declarations on one line out of canonical group order
//! - `color-naming`: literal hex colors without a descriptive token
//!
//! Rules run in that order, so issues come out grouped by category.

use crate::{parser::Stylesheet, utils::CoreError, Result};
use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::Serialize;

pub mod rules;

pub use rules::BuiltinRules;

/// Severity level for lint issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IssueSeverity {
    /// Informational message - no action required
    Info,
    /// Hint for improvement - optional fix
    Hint,
    /// Warning - should be addressed
    Warning,
    /// Error - must be fixed
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Hint => write!(f, "hint"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl FromStr for IssueSeverity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "hint" => Ok(Self::Hint),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(CoreError::InvalidSeverity(s.to_string())),
        }
    }
}

/// Category of lint issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IssueCategory {
    /// Selector does not follow the naming convention
    SelectorNaming,
    /// Selector specificity is too low
    Specificity,
    /// Declarations are out of canonical order
    PropertyOrder,
    /// Hex colors lack a descriptive name
    ColorNaming,
}

impl IssueCategory {
    /// Every category, in reporting order
    pub const ALL: [Self; 4] = [
        Self::SelectorNaming,
        Self::Specificity,
        Self::PropertyOrder,
        Self::ColorNaming,
    ];
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectorNaming => write!(f, "selector-naming"),
            Self::Specificity => write!(f, "specificity"),
            Self::PropertyOrder => write!(f, "property-order"),
            Self::ColorNaming => write!(f, "color-naming"),
        }
    }
}

/// Location information for a lint issue.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IssueLocation<'a> {
    /// Line number as it appears in the message (1-based)
    ///
    /// For selector rules this is the selector's ordinal, not a physical line.
    pub line: usize,
    /// Byte offset of `span` in the source
    pub offset: usize,
    /// The problematic text span
    pub span: &'a str,
}

impl IssueLocation<'_> {
    /// Length of the problematic span in bytes
    #[must_use]
    pub const fn length(&self) -> usize {
        self.span.len()
    }
}

/// A single lint issue found in the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LintIssue<'a> {
    /// Severity level
    severity: IssueSeverity,
    /// Category of issue
    category: IssueCategory,
    /// Human-readable message
    message: String,
    /// Location in source (if available)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    location: Option<IssueLocation<'a>>,
    /// Rule ID that generated this issue
    rule_id: &'static str,
    /// Suggested fix (if available)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    suggested_fix: Option<String>,
}

impl<'a> LintIssue<'a> {
    /// Create a new lint issue.
    #[must_use]
    pub const fn new(
        severity: IssueSeverity,
        category: IssueCategory,
        rule_id: &'static str,
        message: String,
    ) -> Self {
        Self {
            severity,
            category,
            message,
            location: None,
            rule_id,
            suggested_fix: None,
        }
    }

    /// Add location information.
    #[must_use]
    pub fn with_location(mut self, location: IssueLocation<'a>) -> Self {
        self.location = Some(location);
        self
    }

    /// Add suggested fix.
    #[must_use]
    pub fn with_suggested_fix(mut self, fix: String) -> Self {
        self.suggested_fix = Some(fix);
        self
    }

    /// Get severity level.
    #[must_use]
    pub const fn severity(&self) -> IssueSeverity {
        self.severity
    }

    /// Get issue category.
    #[must_use]
    pub const fn category(&self) -> IssueCategory {
        self.category
    }

    /// Get issue message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get location information.
    #[must_use]
    pub const fn location(&self) -> Option<&IssueLocation<'a>> {
        self.location.as_ref()
    }

    /// Get rule ID.
    #[must_use]
    pub const fn rule_id(&self) -> &'static str {
        self.rule_id
    }

    /// Get suggested fix.
    #[must_use]
    pub fn suggested_fix(&self) -> Option<&str> {
        self.suggested_fix.as_deref()
    }
}

impl fmt::Display for LintIssue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Configuration for linting behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    /// Minimum severity level to report
    pub min_severity: IssueSeverity,
    /// Maximum number of issues to report (0 = unlimited)
    pub max_issues: usize,
    /// Enabled rule IDs (empty = all enabled)
    pub enabled_rules: Vec<String>,
    /// Disabled rule IDs
    pub disabled_rules: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            min_severity: IssueSeverity::Info,
            max_issues: 0,
            enabled_rules: Vec::new(),
            disabled_rules: Vec::new(),
        }
    }
}

impl LintConfig {
    /// Set minimum severity level.
    #[must_use]
    pub const fn with_min_severity(mut self, severity: IssueSeverity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Set maximum number of issues.
    #[must_use]
    pub const fn with_max_issues(mut self, max: usize) -> Self {
        self.max_issues = max;
        self
    }

    /// Restrict linting to the given rule (may be called repeatedly).
    #[must_use]
    pub fn with_enabled_rule<T: Into<String>>(mut self, rule_id: T) -> Self {
        self.enabled_rules.push(rule_id.into());
        self
    }

    /// Skip the given rule (may be called repeatedly).
    #[must_use]
    pub fn with_disabled_rule<T: Into<String>>(mut self, rule_id: T) -> Self {
        self.disabled_rules.push(rule_id.into());
        self
    }

    /// Check if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        if self.disabled_rules.iter().any(|id| id == rule_id) {
            return false;
        }
        self.enabled_rules.is_empty() || self.enabled_rules.iter().any(|id| id == rule_id)
    }

    /// Check if severity should be reported.
    #[must_use]
    pub fn should_report_severity(&self, severity: IssueSeverity) -> bool {
        severity >= self.min_severity
    }

    /// Check that every configured rule id names a built-in rule.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownRule`] for the first unknown id.
    pub fn validate(&self) -> Result<()> {
        let known = BuiltinRules::all_rule_ids();
        match self
            .enabled_rules
            .iter()
            .chain(&self.disabled_rules)
            .find(|id| !known.contains(&id.as_str()))
        {
            Some(unknown) => Err(CoreError::unknown_rule(unknown.as_str())),
            None => Ok(()),
        }
    }
}

/// Trait for implementing lint rules.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Rule description.
    fn description(&self) -> &'static str;

    /// Default severity level.
    fn default_severity(&self) -> IssueSeverity;

    /// Category of the issues this rule reports.
    fn category(&self) -> IssueCategory;

    /// Check stylesheet and return issues in source order.
    fn check_stylesheet<'a>(&self, sheet: &Stylesheet<'a>) -> Vec<LintIssue<'a>>;
}

/// Lint a stylesheet with the given configuration.
///
/// Runs all enabled rules against the stylesheet and returns found issues,
/// respecting the configuration limits and filters.
///
/// # Errors
///
/// Returns an error if the configuration names an unknown rule.
pub fn lint_stylesheet<'a>(
    sheet: &Stylesheet<'a>,
    config: &LintConfig,
) -> Result<Vec<LintIssue<'a>>> {
    config.validate()?;
    Ok(run_rules(sheet, config))
}

/// Run the built-in rules without validating the configuration
pub(crate) fn run_rules<'a>(sheet: &Stylesheet<'a>, config: &LintConfig) -> Vec<LintIssue<'a>> {
    let mut issues = Vec::new();

    for rule in BuiltinRules::all_rules() {
        if !config.is_rule_enabled(rule.id()) {
            log::debug!("skipping disabled rule {}", rule.id());
            continue;
        }

        let mut rule_issues = rule.check_stylesheet(sheet);
        rule_issues.retain(|issue| config.should_report_severity(issue.severity()));
        log::debug!("rule {} reported {} issues", rule.id(), rule_issues.len());

        issues.extend(rule_issues);

        // Check max issues limit
        if config.max_issues > 0 && issues.len() >= config.max_issues {
            issues.truncate(config.max_issues);
            break;
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(IssueSeverity::Info < IssueSeverity::Hint);
        assert!(IssueSeverity::Hint < IssueSeverity::Warning);
        assert!(IssueSeverity::Warning < IssueSeverity::Error);
    }

    #[test]
    fn severity_round_trip_through_text() {
        for severity in [
            IssueSeverity::Info,
            IssueSeverity::Hint,
            IssueSeverity::Warning,
            IssueSeverity::Error,
        ] {
            assert_eq!(severity.to_string().parse::<IssueSeverity>(), Ok(severity));
        }
        assert_eq!(" WARN ".parse::<IssueSeverity>(), Ok(IssueSeverity::Warning));
        assert_eq!(
            "loud".parse::<IssueSeverity>(),
            Err(CoreError::InvalidSeverity("loud".to_string()))
        );
    }

    #[test]
    fn category_display() {
        assert_eq!(IssueCategory::SelectorNaming.to_string(), "selector-naming");
        assert_eq!(IssueCategory::ColorNaming.to_string(), "color-naming");
    }

    #[test]
    fn issue_builder() {
        let source = "div {";
        let issue = LintIssue::new(
            IssueSeverity::Warning,
            IssueCategory::SelectorNaming,
            "selector-naming",
            "Invalid selector".to_string(),
        )
        .with_location(IssueLocation {
            line: 1,
            offset: 0,
            span: &source[..3],
        })
        .with_suggested_fix("block".to_string());

        assert_eq!(issue.to_string(), "Invalid selector");
        assert_eq!(issue.location().map(IssueLocation::length), Some(3));
        assert_eq!(issue.suggested_fix(), Some("block"));
        assert_eq!(issue.rule_id(), "selector-naming");
    }

    #[test]
    fn config_rule_filters() {
        let config = LintConfig::default();
        assert!(config.is_rule_enabled("color-naming"));

        let config = LintConfig::default().with_enabled_rule("color-naming");
        assert!(config.is_rule_enabled("color-naming"));
        assert!(!config.is_rule_enabled("property-order"));

        let config = LintConfig::default()
            .with_enabled_rule("color-naming")
            .with_disabled_rule("color-naming");
        assert!(!config.is_rule_enabled("color-naming"));
    }

    #[test]
    fn config_severity_filter() {
        let config = LintConfig::default().with_min_severity(IssueSeverity::Warning);
        assert!(!config.should_report_severity(IssueSeverity::Hint));
        assert!(config.should_report_severity(IssueSeverity::Warning));
        assert!(config.should_report_severity(IssueSeverity::Error));
    }

    #[test]
    fn config_validation() {
        assert!(LintConfig::default().validate().is_ok());
        assert!(LintConfig::default()
            .with_disabled_rule("low-specificity")
            .validate()
            .is_ok());
        assert_eq!(
            LintConfig::default().with_enabled_rule("no-such-rule").validate(),
            Err(CoreError::unknown_rule("no-such-rule"))
        );
    }

    #[test]
    fn lint_rejects_unknown_rule() {
        let sheet = Stylesheet::parse("div {");
        let config = LintConfig::default().with_disabled_rule("nope");
        assert!(lint_stylesheet(&sheet, &config).is_err());
    }

    #[test]
    fn max_issues_truncates_in_order() {
        let sheet = Stylesheet::parse("div {\n}\nspan {\n}\n");
        let all = lint_stylesheet(&sheet, &LintConfig::default()).unwrap();
        let limited = lint_stylesheet(&sheet, &LintConfig::default().with_max_issues(2)).unwrap();

        assert!(all.len() > 2);
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[..], all[..2]);
    }

    #[test]
    fn min_severity_drops_info_issues() {
        let sheet = Stylesheet::parse("div {");
        let config = LintConfig::default().with_min_severity(IssueSeverity::Warning);
        let issues = lint_stylesheet(&sheet, &config).unwrap();

        // "div" is valid naming and only low specificity (info)
        assert!(issues.is_empty());
    }
}
