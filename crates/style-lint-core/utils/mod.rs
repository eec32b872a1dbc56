//! Utility functions and shared types for style-lint core
//!
//! Contains the error type, input decoding helpers, sample stylesheets, and
//! span helpers that map borrowed slices back to positions in the source.
//!
//! # Example
//!
//! ```rust
//! use style_lint_core::utils::Spans;
//!
//! let source = "a {\n  color: red;\n}";
//! let value = &source[13..16];
//! let spans = Spans::new(source);
//! assert_eq!(spans.span_offset(value), Some(13));
//! assert!(!spans.validate_span(&String::from("red")));
//! ```

pub mod errors;
pub mod generators;
pub mod utf8;

pub use errors::CoreError;
pub use generators::{StylesheetGenerator, SAMPLE_HTML, SAMPLE_STYLESHEET};
pub use utf8::{recover_utf8, strip_bom};

/// Zero-copy span utilities for mapping lint spans back to the source
///
/// Every slice handed out by the parser borrows from the original
/// stylesheet text, so its position can be recovered from pointers alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spans<'a> {
    /// Reference to the original source text
    source: &'a str,
}

impl<'a> Spans<'a> {
    /// Create new span utilities for source text
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Validate that a span references this source text
    ///
    /// Returns `true` if the span is a valid substring of the source.
    #[must_use]
    pub fn validate_span(&self, span: &str) -> bool {
        let source_start = self.source.as_ptr() as usize;
        let source_end = source_start + self.source.len();

        let span_start = span.as_ptr() as usize;
        let span_end = span_start + span.len();

        span_start >= source_start && span_end <= source_end
    }

    /// Get byte offset of span within source
    #[must_use]
    pub fn span_offset(&self, span: &str) -> Option<usize> {
        let source_start = self.source.as_ptr() as usize;
        let span_start = span.as_ptr() as usize;

        if self.validate_span(span) {
            Some(span_start - source_start)
        } else {
            None
        }
    }
}
