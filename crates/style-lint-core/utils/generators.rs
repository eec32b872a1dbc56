//! Sample and synthetic stylesheets
//!
//! Provides the starter buffers shown to new users and a generator for
//! synthetic stylesheets of arbitrary size, used by benchmarks and tests.

use std::fmt::Write;

/// Starter document preloaded into the HTML buffer of a new submission
pub const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Document</title>
  <style>
    /* Write your CSS here */
  </style>
</head>
<body>
  <!-- Write your HTML here -->
</body>
</html>"#;

/// Starter stylesheet preloaded into the CSS buffer of a new submission
pub const SAMPLE_STYLESHEET: &str = r"/* Reset styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

/* Basic styles */
body {
  font-family: Arial, sans-serif;
  line-height: 1.6;
}

/* Header styles */
header {
  background-color: #333;
  color: #fff;
  padding: 10px;
}

nav ul {
  list-style-type: none;
  display: flex;
}

nav ul li {
  margin-right: 20px;
}

nav ul li a {
  color: #fff;
  text-decoration: none;
}

/* Main content styles */
main {
  padding: 20px;
}

section {
  margin-bottom: 40px;
}

/* Footer styles */
footer {
  background-color: #333;
  color: #fff;
  text-align: center;
  padding: 10px;
}

/* Responsive styles */
@media (max-width: 768px) {
  nav ul {
    flex-direction: column;
  }

  nav ul li {
    margin-right: 0;
    margin-bottom: 10px;
  }
}
";

/// Synthetic stylesheet generator for benchmarking
#[derive(Debug, Clone)]
pub struct StylesheetGenerator {
    /// Number of rule blocks to generate
    pub rules_count: usize,
    /// Whether each block carries deliberate style violations
    pub complexity_level: ComplexityLevel,
}

/// Stylesheet content levels for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityLevel {
    /// One declaration per line, keyword values only
    Simple,
    /// Adds an id/class selector, an out-of-order inline declaration pair
    /// and a literal hex color to every block
    WithIssues,
}

impl StylesheetGenerator {
    /// Create generator for blocks without per-line violations
    #[must_use]
    pub const fn simple(rules_count: usize) -> Self {
        Self {
            rules_count,
            complexity_level: ComplexityLevel::Simple,
        }
    }

    /// Create generator for blocks with deliberate violations
    #[must_use]
    pub const fn with_issues(rules_count: usize) -> Self {
        Self {
            rules_count,
            complexity_level: ComplexityLevel::WithIssues,
        }
    }

    /// Generate the complete stylesheet
    #[must_use]
    pub fn generate(&self) -> String {
        let mut sheet = String::with_capacity(self.rules_count * 96);

        for i in 0..self.rules_count {
            match self.complexity_level {
                ComplexityLevel::Simple => {
                    write!(
                        sheet,
                        "card__item--{modifier} {{\n  position: relative;\n  display: block;\n  padding: {i}px;\n}}\n\n",
                        modifier = letter_name(i),
                    )
                    .unwrap();
                }
                ComplexityLevel::WithIssues => {
                    write!(
                        sheet,
                        "#item-{i} .title {{\n  display: block;\n  color: #{i:06x}; margin: 0;\n}}\n\n",
                    )
                    .unwrap();
                }
            }
        }

        sheet
    }
}

/// Map an index to a lowercase-letters-only name (`a`, `b`, .., `z`, `ba`, ..)
fn letter_name(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'a' + (index % 26) as u8);
        index /= 26;
        if index == 0 {
            break;
        }
    }
    letters.iter().rev().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_names_are_lowercase_only() {
        assert_eq!(letter_name(0), "a");
        assert_eq!(letter_name(25), "z");
        assert_eq!(letter_name(26), "ba");
        assert!(letter_name(1000).chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn generated_block_count() {
        let sheet = StylesheetGenerator::simple(12).generate();
        assert_eq!(sheet.matches('{').count(), 12);
        assert_eq!(sheet.matches('}').count(), 12);

        let sheet = StylesheetGenerator::with_issues(7).generate();
        assert_eq!(sheet.matches("#item-").count(), 7);
        assert_eq!(sheet.lines().filter(|l| l.contains("margin: 0;")).count(), 7);
    }

    #[test]
    fn empty_generator() {
        assert!(StylesheetGenerator::simple(0).generate().is_empty());
    }

    #[test]
    fn sample_html_shape() {
        assert!(SAMPLE_HTML.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(SAMPLE_HTML.contains("/* Write your CSS here */"));
        assert!(SAMPLE_HTML.ends_with("</html>"));
    }

    #[test]
    fn sample_stylesheet_shape() {
        assert!(SAMPLE_STYLESHEET.starts_with("/* Reset styles */\n* {"));
        assert!(SAMPLE_STYLESHEET.contains("@media (max-width: 768px) {"));
        assert_eq!(SAMPLE_STYLESHEET.matches('{').count(), 12);
    }
}
