//! Selector specificity estimate
//!
//! A crude proxy for CSS specificity, not the real algorithm:
//! `100 * ids + 10 * classes + (words - classes)`, where ids counts `#`,
//! classes counts `.` and words counts runs of ASCII letters. Pseudo-classes,
//! attribute selectors and letters inside class or id names all feed the
//! word count.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scores below this are reported as low specificity
pub const LOW_SPECIFICITY_THRESHOLD: i64 = 10;

/// Runs of ASCII letters
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z]+").expect("word pattern is valid"));

/// Counts that make up a specificity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Specificity {
    /// Number of `#` characters
    pub ids: usize,
    /// Number of `.` characters
    pub classes: usize,
    /// Number of letter runs
    pub words: usize,
}

impl Specificity {
    /// Count the components of `selector`
    #[must_use]
    pub fn of(selector: &str) -> Self {
        Self {
            ids: selector.matches('#').count(),
            classes: selector.matches('.').count(),
            words: WORD_PATTERN.find_iter(selector).count(),
        }
    }

    /// Combined score
    ///
    /// The word term alone may go negative, the total never does.
    #[must_use]
    pub const fn score(&self) -> i64 {
        let ids = self.ids as i64;
        let classes = self.classes as i64;
        let words = self.words as i64;

        ids * 100 + classes * 10 + (words - classes)
    }

    /// Check whether the score falls under [`LOW_SPECIFICITY_THRESHOLD`]
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.score() < LOW_SPECIFICITY_THRESHOLD
    }
}

/// Specificity score of `selector`
///
/// # Example
///
/// ```rust
/// use style_lint_core::analysis::specificity::get_specificity;
///
/// assert_eq!(get_specificity("#header"), 101);
/// assert_eq!(get_specificity("div"), 1);
/// assert_eq!(get_specificity(".nav a"), 11);
/// ```
#[must_use]
pub fn get_specificity(selector: &str) -> i64 {
    Specificity::of(selector).score()
}
