//! Code submissions and the feedback shown for them
//!
//! A submission holds the two buffers a user edits. Only the CSS buffer is
//! analysed; the HTML buffer is carried along untouched.

use crate::{
    analysis::StyleAnalysis,
    utils::{SAMPLE_HTML, SAMPLE_STYLESHEET},
};
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Message shown when a submission produces no findings
pub const SUCCESS_MESSAGE: &str = "No issues found!";

/// The user's current HTML and CSS buffers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeSubmission {
    /// HTML buffer (not analysed)
    pub html: String,
    /// CSS buffer
    pub css: String,
}

impl CodeSubmission {
    /// Create a submission from both buffers
    pub fn new<H: Into<String>, C: Into<String>>(html: H, css: C) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
        }
    }

    /// Create a submission with only a CSS buffer
    pub fn from_css<C: Into<String>>(css: C) -> Self {
        Self::new(String::new(), css)
    }

    /// Create a submission holding the starter document and stylesheet
    ///
    /// This is the state a new editing session opens with.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(SAMPLE_HTML, SAMPLE_STYLESHEET)
    }
}

/// Ordered finding messages for one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Feedback {
    /// Finding messages, grouped by category in reporting order
    findings: Vec<String>,
}

impl Feedback {
    /// Wrap a list of finding messages
    #[must_use]
    pub const fn new(findings: Vec<String>) -> Self {
        Self { findings }
    }

    /// Finding messages in reporting order
    #[must_use]
    pub fn findings(&self) -> &[String] {
        &self.findings
    }

    /// Check whether the submission passed every check
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of findings
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Check whether there are no findings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.findings.is_empty() {
            return f.write_str(SUCCESS_MESSAGE);
        }

        for (i, finding) in self.findings.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(finding)?;
        }
        Ok(())
    }
}

/// Validate a submission and produce fresh feedback
///
/// The result replaces any earlier feedback; nothing carries over between
/// calls.
///
/// # Example
///
/// ```rust
/// use style_lint_core::analysis::{validate_code_submission, CodeSubmission};
///
/// let submission = CodeSubmission::new("<p>hi</p>", "");
/// assert_eq!(validate_code_submission(&submission).to_string(), "No issues found!");
/// ```
#[must_use]
pub fn validate_code_submission(submission: &CodeSubmission) -> Feedback {
    StyleAnalysis::analyze(&submission.css).feedback()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_css_is_success() {
        let feedback = validate_code_submission(&CodeSubmission::default());
        assert!(feedback.is_success());
        assert!(feedback.is_empty());
        assert_eq!(feedback.to_string(), SUCCESS_MESSAGE);
    }

    #[test]
    fn html_buffer_is_ignored() {
        let with_html = CodeSubmission::new("<div class=\"Bad Name\">", "card {");
        let without_html = CodeSubmission::from_css("card {");
        assert_eq!(
            validate_code_submission(&with_html),
            validate_code_submission(&without_html)
        );
    }

    #[test]
    fn display_lists_one_finding_per_line() {
        let feedback = validate_code_submission(&CodeSubmission::from_css("div {"));
        assert_eq!(feedback.len(), 1);
        assert_eq!(
            feedback.to_string(),
            "Low specificity at line 1: \"div\" has a specificity of 1."
        );

        let feedback = Feedback::new(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(feedback.to_string(), "one\ntwo");
    }

    #[test]
    fn sample_submission_holds_both_starter_buffers() {
        let submission = CodeSubmission::sample();
        assert_eq!(submission.html, SAMPLE_HTML);
        assert_eq!(submission.css, SAMPLE_STYLESHEET);
        assert_eq!(
            validate_code_submission(&submission),
            validate_code_submission(&CodeSubmission::from_css(SAMPLE_STYLESHEET))
        );
    }

    #[test]
    fn repeated_validation_is_identical() {
        let submission = CodeSubmission::sample();
        let first = validate_code_submission(&submission);
        let second = validate_code_submission(&submission);
        assert_eq!(first, second);
        assert!(!first.is_success());
    }
}
