//! # style-lint core
//!
//! Heuristic style feedback for hand-written CSS. Pass in stylesheet text and
//! get back a list of human-readable findings about:
//!
//! - **Selector naming**: lowercase `block__element--modifier` selectors
//! - **Specificity**: selectors scoring under 10 on a crude estimate
//! - **Property order**: same-line declarations out of canonical order
//! - **Color naming**: literal hex colors without a descriptive name
//!
//! The analysis is a handful of regex and string scans, not a CSS parser.
//! It never fails: malformed input just produces fewer (or odder) findings.
//!
//! ## Quick Start
//!
//! ```rust
//! use style_lint_core::analyze;
//!
//! let findings = analyze("div { color: red; margin: 0; }");
//! assert_eq!(
//!     findings,
//!     [
//!         "Low specificity at line 1: \"div\" has a specificity of 1.",
//!         "Line 1: The property \"margin\" should be declared before \"color\".",
//!     ]
//! );
//!
//! assert!(analyze("").is_empty());
//! ```

#![deny(unsafe_code)]

pub mod analysis;
pub mod parser;
pub mod utils;

pub use analysis::{
    validate_code_submission, CodeSubmission, Feedback, StyleAnalysis, SUCCESS_MESSAGE,
};
pub use parser::Stylesheet;
pub use utils::CoreError;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for core operations, using the crate's unified `CoreError`.
pub type Result<T> = core::result::Result<T, CoreError>;

/// Analyze stylesheet text and return the finding messages in order
///
/// Selector naming issues come first, then specificity, property order and
/// color naming. Identical input always gives an identical list.
#[must_use]
pub fn analyze(css: &str) -> Vec<String> {
    StyleAnalysis::analyze(css)
        .issues()
        .iter()
        .map(|issue| issue.message().to_string())
        .collect()
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::analysis::{linting::lint_stylesheet, LintConfig};

    #[test]
    fn test_core_functionality_integration() {
        let css = "card {\n  color: #123456;\n}\n\n.card__title { opacity: 1; color: red; }\n";

        let sheet = Stylesheet::parse(css);
        assert_eq!(sheet.selectors().len(), 2);

        let issues = lint_stylesheet(&sheet, &LintConfig::default())
            .expect("Should run linting successfully");
        let messages: Vec<_> = issues.iter().map(|issue| issue.message()).collect();

        assert_eq!(
            messages,
            vec![
                "Invalid selector at line 2: \"color: #123456;\n}\n\n.card__title\".",
                "Low specificity at line 1: \"card\" has a specificity of 1.",
                "Line 5: The property \"color\" should be declared before \"opacity\".",
                "Line 2: Hex color \"#123456\" should have a descriptive name.",
            ]
        );
        assert_eq!(analyze(css), messages);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let first = analyze(utils::SAMPLE_STYLESHEET);
        let second = analyze(utils::SAMPLE_STYLESHEET);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_stylesheet_handling() {
        assert!(analyze("").is_empty());
        assert_eq!(
            validate_code_submission(&CodeSubmission::default()).to_string(),
            SUCCESS_MESSAGE
        );
    }
}
