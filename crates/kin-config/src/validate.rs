//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The articles file does not exist.
    ArticlesMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The articles path exists but is not a file.
    ArticlesNotAFile {
        /// Path that is not a file.
        path: String,
    },
    /// A keyword rule has no keywords and can never match.
    EmptyKeywordRule {
        /// Config section, `tags` or `categories`.
        section: &'static str,
        /// Rule name.
        name: String,
    },
    /// Built-in tags are disabled and no custom tags are defined.
    NoTagRules,
    /// Built-in categories are disabled and no custom categories are defined.
    NoCategoryRules,
    /// The fallback category is empty.
    EmptyFallback,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArticlesMissing { path } => {
                write!(f, "articles file does not exist: {path}")
            }
            Self::ArticlesNotAFile { path } => {
                write!(f, "articles path is not a file: {path}")
            }
            Self::EmptyKeywordRule { section, name } => {
                write!(f, "{section} rule '{name}' has no keywords")
            }
            Self::NoTagRules => {
                write!(f, "no tag rules are defined; tagging will clear all tags")
            }
            Self::NoCategoryRules => {
                write!(
                    f,
                    "no category rules are defined; classification will always use the fallback"
                )
            }
            Self::EmptyFallback => {
                write!(f, "category fallback is empty")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let path = &config.articles.path;
    if !path.exists() {
        warnings.push(ConfigWarning::ArticlesMissing {
            path: path.display().to_string(),
        });
    } else if !path.is_file() {
        warnings.push(ConfigWarning::ArticlesNotAFile {
            path: path.display().to_string(),
        });
    }

    for (section, keywords) in [
        ("tags", &config.tags.keywords),
        ("categories", &config.categories.keywords),
    ] {
        for (name, list) in keywords {
            if list.is_empty() {
                warnings.push(ConfigWarning::EmptyKeywordRule {
                    section,
                    name: name.clone(),
                });
            }
        }
    }

    if !config.tags.builtin && config.tags.keywords.is_empty() {
        warnings.push(ConfigWarning::NoTagRules);
    }
    if !config.categories.builtin && config.categories.keywords.is_empty() {
        warnings.push(ConfigWarning::NoCategoryRules);
    }
    if config.categories.fallback.trim().is_empty() {
        warnings.push(ConfigWarning::EmptyFallback);
    }

    warnings
}
