//! Configuration file parsing.
//!
//! Parses individual `.kin.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Article feed section.
    pub articles: Option<RawArticles>,
    /// Tag assignment section.
    pub tags: Option<RawTags>,
    /// Subcategory classification section.
    pub categories: Option<RawCategories>,
}

/// Raw `[articles]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawArticles {
    /// Path to the articles JSON file, relative to the config file.
    pub path: Option<String>,
}

/// Keywords for one rule: a single string or an array of strings.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawKeywords(#[serde_as(as = "OneOrMany<_>")] pub Vec<String>);

/// Raw `[tags]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawTags {
    /// Whether the built-in tag vocabulary is enabled.
    pub builtin: Option<bool>,
    /// Tag name to keywords.
    pub keywords: Option<IndexMap<String, RawKeywords>>,
}

/// Raw `[categories]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCategories {
    /// Whether the built-in categories are enabled.
    pub builtin: Option<bool>,
    /// Category used when no keyword matches.
    pub fallback: Option<String>,
    /// Subcategories treated as unassigned.
    pub replace: Option<Vec<String>>,
    /// Category name to keywords.
    pub keywords: Option<IndexMap<String, RawKeywords>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.articles.is_none());
        assert!(config.tags.is_none());
        assert!(config.categories.is_none());
    }

    #[test]
    fn test_parse_articles_path() {
        let toml = r#"
[articles]
path = "public/data/articles.json"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(
            config.articles.unwrap().path.as_deref(),
            Some("public/data/articles.json")
        );
    }

    #[test]
    fn test_parse_keywords_one_or_many() {
        let toml = r#"
[tags]
builtin = false

[tags.keywords]
dropout = "dropout"
"state-space models" = ["ssm", "state space"]
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let tags = config.tags.unwrap();
        assert_eq!(tags.builtin, Some(false));
        let keywords = tags.keywords.unwrap();
        assert_eq!(keywords["dropout"].0, vec!["dropout"]);
        assert_eq!(keywords["state-space models"].0, vec!["ssm", "state space"]);
    }

    #[test]
    fn test_parse_empty_keyword_list() {
        let toml = r#"
[categories.keywords]
Empty = []
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let keywords = config.categories.unwrap().keywords.unwrap();
        assert!(keywords["Empty"].0.is_empty());
    }

    #[test]
    fn test_parse_categories() {
        let toml = r#"
[categories]
fallback = "Misc"
replace = ["General", "Uncategorized"]
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let categories = config.categories.unwrap();
        assert_eq!(categories.fallback.as_deref(), Some("Misc"));
        assert_eq!(
            categories.replace,
            Some(vec!["General".to_string(), "Uncategorized".to_string()])
        );
        assert!(categories.builtin.is_none());
    }

    #[test]
    fn test_parse_root() {
        let config = parse_config_str("root = true", Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let result = parse_config_str("[articles]\nfile = \"x\"\n", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_invalid_toml_mentions_path() {
        let err = parse_config_str("[articles", Path::new("broken.toml")).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_is_root_config_unreadable() {
        assert!(!is_root_config(Path::new("/nonexistent/.kin.toml")));
    }
}
