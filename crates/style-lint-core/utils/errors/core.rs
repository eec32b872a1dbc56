//! Core error type for style-lint operations
//!
//! Analysis itself never fails: every style violation is reported as a lint
//! issue, not an error. `CoreError` only covers the edges around analysis,
//! namely lint configuration and decoding of raw input.

use thiserror::Error;

/// Main error type for style-lint core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A rule id in the lint configuration does not name a built-in rule
    #[error("Unknown lint rule: {rule_id}")]
    UnknownRule { rule_id: String },

    /// A severity name could not be parsed
    #[error("Invalid severity level: '{0}' (expected info, hint, warning or error)")]
    InvalidSeverity(String),

    /// Other configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input could not be read or decoded
    #[error("I/O error: {0}")]
    Io(String),
}

impl CoreError {
    /// Create unknown rule error
    pub fn unknown_rule<T: Into<String>>(rule_id: T) -> Self {
        Self::UnknownRule {
            rule_id: rule_id.into(),
        }
    }

    /// Create configuration error from message
    pub fn config<T: std::fmt::Display>(message: T) -> Self {
        Self::Config(message.to_string())
    }

    /// Check if error is recoverable by changing user input or configuration
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::UnknownRule { .. } | Self::InvalidSeverity(_) | Self::Config(_) => true,
            Self::Io(_) => false,
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
