//! Error categorization for style-lint errors
//!
//! Lets front ends group errors and decide whether to show a usage hint.

use super::CoreError;
use core::fmt;

/// Error category for filtering and user interface organization
///
/// # Examples
///
/// ```rust
/// use style_lint_core::utils::errors::{CoreError, ErrorCategory};
///
/// let error = CoreError::unknown_rule("no-such-rule");
/// assert_eq!(error.category(), ErrorCategory::Configuration);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Problems with lint configuration or command-line options
    Configuration,

    /// Problems reading or decoding input text
    Io,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Io => write!(f, "io"),
        }
    }
}

impl ErrorCategory {
    /// Check if errors in this category are typically user-fixable
    #[must_use]
    pub const fn is_user_fixable(self) -> bool {
        matches!(self, Self::Configuration)
    }
}

impl CoreError {
    /// Get error category for filtering/grouping
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownRule { .. } | Self::InvalidSeverity(_) | Self::Config(_) => {
                ErrorCategory::Configuration
            }
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    /// Get a suggestion for resolving the error, if one exists
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownRule { .. } => Some("Run with --list-rules to see the available rule ids"),
            Self::InvalidSeverity(_) => Some("Use one of: info, hint, warning, error"),
            Self::Io(_) => Some("Check that the file exists and is readable"),
            Self::Config(_) => None,
        }
    }
}
