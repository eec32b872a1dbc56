//! Error types for style-lint
//!
//! # Examples
//!
//! ```rust
//! use style_lint_core::utils::errors::{CoreError, ErrorCategory};
//!
//! let err = CoreError::InvalidSeverity("loud".to_string());
//! assert_eq!(err.category(), ErrorCategory::Configuration);
//! assert!(err.suggestion().is_some());
//! ```

mod category;
mod core;

pub use category::ErrorCategory;
pub use self::core::{CoreError, Result};
