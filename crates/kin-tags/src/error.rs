//! Error types for keyword rules.

use thiserror::Error;

/// Errors that can occur when building tagging or classification rules.
#[derive(Debug, Error, PartialEq)]
pub enum TagError {
    /// A rule has no keywords and could never match.
    #[error("rule '{name}' has no keywords")]
    EmptyRule {
        /// Tag or category name of the rule.
        name: String,
    },

    /// A rule contains a keyword that is empty or only whitespace.
    #[error("rule '{name}' contains a blank keyword")]
    BlankKeyword {
        /// Tag or category name of the rule.
        name: String,
    },

    /// The keywords could not be compiled into a matcher.
    #[error("rule '{name}' has keywords that cannot be matched: {source}")]
    Pattern {
        /// Tag or category name of the rule.
        name: String,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// The rule name itself is empty.
    #[error("rule names must not be empty")]
    EmptyName,
}
