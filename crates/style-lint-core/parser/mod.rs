//! Heuristic stylesheet reader
//!
//! This is deliberately not a CSS parser. It produces two flat views of the
//! raw text that the lint rules work on:
//!
//! - the selector sequence, cut at every `{` by a single left-to-right scan
//!   over the whole text (see [`extract_selectors`])
//! - the physical lines, trimmed and numbered from 1
//!
//! Comments, strings, nesting and at-rules get no special treatment. A `{`
//! inside a comment still ends a selector, and `@media` preludes come out as
//! selectors like any other.
//!
//! # Example
//!
//! ```rust
//! use style_lint_core::parser::Stylesheet;
//!
//! let sheet = Stylesheet::parse("card {\n  color: red;\n}\n");
//! assert_eq!(sheet.selectors().len(), 1);
//! assert_eq!(sheet.selectors()[0].text(), "card");
//! assert_eq!(sheet.lines().len(), 4);
//! assert_eq!(sheet.lines()[1].text(), "color: red;");
//! ```

pub mod declarations;
pub mod selectors;

pub use declarations::{color_values, declaration_body, property_names};
pub use selectors::{extract_selectors, Selector};

/// One physical line of the stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number
    number: usize,
    /// Line content with surrounding whitespace trimmed
    text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// 1-based line number
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Trimmed line content
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }
}

/// Read-only view of a stylesheet for one analysis pass
#[derive(Debug, Clone)]
pub struct Stylesheet<'a> {
    /// Original stylesheet text
    source: &'a str,
    /// Selectors in source order
    selectors: Vec<Selector<'a>>,
    /// Trimmed physical lines
    lines: Vec<SourceLine<'a>>,
}

impl<'a> Stylesheet<'a> {
    /// Build the selector and line views over `source`
    ///
    /// Never fails; empty or malformed input just yields fewer entries.
    #[must_use]
    pub fn parse(source: &'a str) -> Self {
        let selectors = extract_selectors(source);
        let lines: Vec<SourceLine<'a>> = source
            .split('\n')
            .enumerate()
            .map(|(index, line)| SourceLine {
                number: index + 1,
                text: line.trim(),
            })
            .collect();

        log::trace!(
            "read stylesheet: {} bytes, {} selectors, {} lines",
            source.len(),
            selectors.len(),
            lines.len()
        );

        Self {
            source,
            selectors,
            lines,
        }
    }

    /// Original stylesheet text
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Extracted selectors in source order
    #[must_use]
    pub fn selectors(&self) -> &[Selector<'a>] {
        &self.selectors
    }

    /// Physical lines in source order
    #[must_use]
    pub fn lines(&self) -> &[SourceLine<'a>] {
        &self.lines
    }

    /// Check whether the stylesheet has no content at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}
