//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::{
    ArticlesSettings, CategorySettings, Config, ConfigError, DEFAULT_ARTICLES_PATH, TagSettings,
    parse::{RawCategories, RawConfig, RawKeywords},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory that relative paths in this file are resolved against.
    fn dir<'a>(&'a self, cwd: &'a Path) -> &'a Path {
        self.path.parent().unwrap_or(cwd)
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Articles path: first definition wins, resolved against its own config's directory;
///   without any definition, `data/articles.json` under `cwd`
/// - Keyword tables: merged by name, first definition of each name wins; names keep
///   their declaration order, nearer files first
pub fn merge_configs(configs: &[ParsedConfig], cwd: &Path) -> Result<Config, ConfigError> {
    let articles = merge_articles(configs, cwd)?;
    let tags = merge_tags(configs);
    let categories = merge_categories(configs);
    let files = configs.iter().map(|c| c.path.clone()).collect();
    let config_root = configs.first().map(|c| c.dir(cwd).to_path_buf());

    Ok(Config {
        articles,
        tags,
        categories,
        files,
        config_root,
    })
}

/// Picks the highest-precedence articles path.
fn merge_articles(configs: &[ParsedConfig], cwd: &Path) -> Result<ArticlesSettings, ConfigError> {
    for parsed in configs {
        if let Some(ref articles) = parsed.config.articles
            && let Some(ref path) = articles.path
        {
            return Ok(ArticlesSettings {
                path: resolve_path(path, parsed.dir(cwd))?,
                source: Some(parsed.path.clone()),
            });
        }
    }

    Ok(ArticlesSettings {
        path: cwd.join(DEFAULT_ARTICLES_PATH),
        source: None,
    })
}

/// Merges tag settings.
fn merge_tags(configs: &[ParsedConfig]) -> TagSettings {
    let mut result = TagSettings::default();

    // Scalars: lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref tags) = parsed.config.tags
            && let Some(v) = tags.builtin
        {
            result.builtin = v;
        }
    }

    result.keywords = merge_keywords(configs.iter().map(|p| {
        p.config
            .tags
            .as_ref()
            .and_then(|t| t.keywords.as_ref())
    }));
    result
}

/// Merges category settings.
fn merge_categories(configs: &[ParsedConfig]) -> CategorySettings {
    let mut result = CategorySettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.categories {
            apply_raw_categories(&mut result, raw);
        }
    }

    result.keywords = merge_keywords(configs.iter().map(|p| {
        p.config
            .categories
            .as_ref()
            .and_then(|c| c.keywords.as_ref())
    }));
    result
}

/// Applies raw category scalars to result, overwriting any present values.
fn apply_raw_categories(result: &mut CategorySettings, raw: &RawCategories) {
    if let Some(v) = raw.builtin {
        result.builtin = v;
    }
    if let Some(ref v) = raw.fallback {
        result.fallback = v.clone();
    }
    if let Some(ref v) = raw.replace {
        result.replace = v.clone();
    }
}

/// Merges keyword tables given in precedence order; the first definition of a name wins.
fn merge_keywords<'a>(
    tables: impl Iterator<Item = Option<&'a IndexMap<String, RawKeywords>>>,
) -> IndexMap<String, Vec<String>> {
    let mut merged = IndexMap::new();
    for table in tables.flatten() {
        for (name, keywords) in table {
            merged
                .entry(name.clone())
                .or_insert_with(|| keywords.0.clone());
        }
    }
    merged
}
