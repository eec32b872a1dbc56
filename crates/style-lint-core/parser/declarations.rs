//! Line-scoped declaration helpers
//!
//! The ordering and color checks look at one trimmed physical line at a
//! time. Declarations split across lines are never compared with each
//! other.

use once_cell::sync::Lazy;
use regex::Regex;

/// `color:` or `background-color:` followed by a value up to the next `;`
///
/// The bare `color` alternative also matches the tail of names such as
/// `border-color`.
static COLOR_DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(color|background-color):\s*([^;]+)").expect("color pattern is valid")
});

/// Slice of `line` between its first `{` and its last `}`
///
/// Without a `{` the slice starts at the beginning of the line. Without a
/// `}` it stops before the line's last character, so `margin: 0;` yields
/// `margin: 0`. When the start lands at or past the end the result is
/// empty. Odd lines give odd slices and that is accepted.
///
/// # Example
///
/// ```rust
/// use style_lint_core::parser::declaration_body;
///
/// assert_eq!(declaration_body("div { color: red; margin: 0; }"), " color: red; margin: 0; ");
/// assert_eq!(declaration_body("margin: 0;"), "margin: 0");
/// assert_eq!(declaration_body("nav ul {"), "");
/// ```
#[must_use]
pub fn declaration_body(line: &str) -> &str {
    let start = line.find('{').map_or(0, |pos| pos + 1);
    let end = line
        .rfind('}')
        .unwrap_or_else(|| line.char_indices().next_back().map_or(0, |(pos, _)| pos));

    if start >= end {
        ""
    } else {
        &line[start..end]
    }
}

/// Property names declared on `line`, in order
///
/// Each `;`-separated piece of the [`declaration_body`] contributes the
/// trimmed text before its first `:`. Empty pieces give empty names; they
/// never resolve to a property group, so the ordering check skips them.
#[must_use]
pub fn property_names(line: &str) -> Vec<&str> {
    declaration_body(line)
        .trim()
        .split(';')
        .map(|declaration| {
            declaration
                .trim()
                .split(':')
                .next()
                .unwrap_or_default()
                .trim()
        })
        .collect()
}

/// Trimmed values of every color declaration on `line`
///
/// # Example
///
/// ```rust
/// use style_lint_core::parser::color_values;
///
/// assert_eq!(color_values("background-color: #333; color: #fff;"), ["#333", "#fff"]);
/// assert_eq!(color_values("border-color:  red"), ["red"]);
/// ```
#[must_use]
pub fn color_values(line: &str) -> Vec<&str> {
    COLOR_DECLARATION_PATTERN
        .captures_iter(line)
        .filter_map(|caps| caps.get(2))
        .map(|value| value.as_str().trim())
        .collect()
}
