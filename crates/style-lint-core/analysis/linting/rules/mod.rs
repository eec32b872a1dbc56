//! Built-in linting rules for stylesheet feedback.
//!
//! Each rule lives in its own module. The registry order is also the order
//! in which issues are reported: selector naming, specificity, property
//! order, color naming.
//!
//! # Example
//!
//! ```rust
//! use style_lint_core::analysis::linting::{rules::BuiltinRules, LintRule};
//! use style_lint_core::parser::Stylesheet;
//!
//! let sheet = Stylesheet::parse("Header {\n  color: #fff;\n}");
//! for rule in BuiltinRules::all_rules() {
//!     for issue in rule.check_stylesheet(&sheet) {
//!         println!("{}: {}", rule.name(), issue.message());
//!     }
//! }
//! ```

use super::LintRule;

pub mod color_naming;
pub mod low_specificity;
pub mod property_order;
pub mod selector_naming;

pub use color_naming::ColorNamingRule;
pub use low_specificity::LowSpecificityRule;
pub use property_order::PropertyOrderRule;
pub use selector_naming::SelectorNamingRule;

/// Built-in lint rules registry
///
/// # Rule List
///
/// - `SelectorNamingRule`: selectors must be lowercase BEM
/// - `LowSpecificityRule`: selector specificity estimate below 10
/// - `PropertyOrderRule`: same-line declarations out of canonical order
/// - `ColorNamingRule`: hex colors without a descriptive token
pub struct BuiltinRules;

impl BuiltinRules {
    /// Get all built-in linting rules, in reporting order
    ///
    /// # Example
    ///
    /// ```rust
    /// use style_lint_core::analysis::linting::rules::BuiltinRules;
    ///
    /// let rules = BuiltinRules::all_rules();
    /// assert_eq!(rules.len(), 4);
    /// ```
    #[must_use]
    pub fn all_rules() -> Vec<Box<dyn LintRule>> {
        vec![
            Box::new(SelectorNamingRule),
            Box::new(LowSpecificityRule),
            Box::new(PropertyOrderRule),
            Box::new(ColorNamingRule),
        ]
    }

    /// Get rules by category
    #[must_use]
    pub fn rules_for_category(category: super::IssueCategory) -> Vec<Box<dyn LintRule>> {
        Self::all_rules()
            .into_iter()
            .filter(|rule| rule.category() == category)
            .collect()
    }

    /// Get rule by ID
    ///
    /// # Example
    ///
    /// ```rust
    /// use style_lint_core::analysis::linting::rules::BuiltinRules;
    ///
    /// let rule = BuiltinRules::rule_by_id("property-order");
    /// assert_eq!(rule.map(|r| r.id()), Some("property-order"));
    /// ```
    #[must_use]
    pub fn rule_by_id(id: &str) -> Option<Box<dyn LintRule>> {
        Self::all_rules().into_iter().find(|rule| rule.id() == id)
    }

    /// Get all rule IDs
    #[must_use]
    pub fn all_rule_ids() -> Vec<&'static str> {
        Self::all_rules().iter().map(|rule| rule.id()).collect()
    }
}
