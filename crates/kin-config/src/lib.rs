//! Configuration system for kin.
//!
//! kin uses TOML configuration files named `.kin.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.kin.toml` files
//! found, then loading `~/.kin.toml` as the global config with lowest precedence.
//!
//! Only the data-handling side is configurable: where the article feed lives and which
//! keyword vocabularies drive tag assignment and subcategory classification. The similarity
//! weights and limits are fixed.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawArticles, RawCategories, RawConfig, RawKeywords, RawTags, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_path;
use serde::Serialize;
pub use templates::{global_template, local_template};
use tracing::debug;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Articles file used when no config sets one, relative to the working directory.
pub const DEFAULT_ARTICLES_PATH: &str = "data/articles.json";

/// Default subcategory for articles that match no category keyword.
pub const DEFAULT_FALLBACK: &str = "Other";

/// Default subcategories that count as unassigned.
pub const DEFAULT_REPLACE: &[&str] = &["General"];

/// Top-level merged configuration for kin.
///
/// This represents the fully resolved configuration after merging all discovered `.kin.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Article feed settings.
    pub articles: ArticlesSettings,
    /// Tag assignment settings.
    pub tags: TagSettings,
    /// Subcategory classification settings.
    pub categories: CategorySettings,
    /// Config files that contributed, highest precedence first.
    pub files: Vec<PathBuf>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.kin.toml` files.
    ///
    /// With no configuration files the defaults apply, with the articles path resolved
    /// against `cwd`.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        debug!(files = config_files.len(), "discovered config files");
        Self::load_from_files(&config_files, cwd)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf], cwd: &Path) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                debug!(path = %path.display(), "parsed config file");
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed, cwd)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - An articles path that doesn't exist or isn't a file
    /// - Keyword rules with no keywords
    /// - No tag rules or no category rules at all
    /// - An empty fallback category
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.kin.toml` file, with the articles path fully
    /// resolved and keyword tables in tie-break order.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableConfig {
            articles: SerializableArticles {
                path: self.articles.path.display().to_string(),
            },
            tags: &self.tags,
            categories: &self.categories,
        };
        toml::to_string_pretty(&serializable).map_err(|source| ConfigError::Serialize { source })
    }
}

/// Where the article feed lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlesSettings {
    /// Path to the articles JSON file.
    pub path: PathBuf,
    /// Config file that set the path, if any.
    pub source: Option<PathBuf>,
}

impl Default for ArticlesSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ARTICLES_PATH),
            source: None,
        }
    }
}

/// Tag assignment vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSettings {
    /// Whether the built-in tag vocabulary is used.
    pub builtin: bool,
    /// Additional or overriding rules: tag name to keywords.
    pub keywords: IndexMap<String, Vec<String>>,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            builtin: true,
            keywords: IndexMap::new(),
        }
    }
}

/// Subcategory classification vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySettings {
    /// Whether the built-in categories are used.
    pub builtin: bool,
    /// Category used when no keyword matches.
    pub fallback: String,
    /// Subcategories treated as unassigned.
    pub replace: Vec<String>,
    /// Additional or overriding rules: category name to keywords, in declaration order.
    pub keywords: IndexMap<String, Vec<String>>,
}

impl Default for CategorySettings {
    fn default() -> Self {
        Self {
            builtin: true,
            fallback: DEFAULT_FALLBACK.to_string(),
            replace: DEFAULT_REPLACE.iter().map(ToString::to_string).collect(),
            keywords: IndexMap::new(),
        }
    }
}

/// Internal struct for TOML serialization of the effective configuration.
#[derive(Serialize)]
struct SerializableConfig<'a> {
    /// Article feed settings.
    articles: SerializableArticles,
    /// Tag assignment settings.
    tags: &'a TagSettings,
    /// Subcategory classification settings.
    categories: &'a CategorySettings,
}

/// Articles section with a printable path.
#[derive(Serialize)]
struct SerializableArticles {
    /// Resolved path to the articles file.
    path: String,
}
