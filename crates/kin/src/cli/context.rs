//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use kin_article::{Article, load_articles};
use kin_config::{CategorySettings, Config, TagSettings};
use kin_engine::{NeighborSnapshot, SimilarityEngine};
use kin_tags::{Classifier, KeywordRule, TagError, Tagger};
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Articles loaded for this invocation.
    corpus: Option<Arc<[Article]>>,
    /// Related-article cache for the loaded corpus.
    engine: SimilarityEngine,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    ///
    /// An `articles` override is resolved against the working directory and replaces the
    /// configured path.
    pub fn load(articles: Option<&Path>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let mut config = load_config_or_failure(&cwd)?;
        if let Some(path) = articles {
            config.articles.path = cwd.join(path);
            config.articles.source = None;
        }
        Ok(Self::new(cwd, config))
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self::new(cwd, Config::default()))
    }

    /// Creates a context around an already loaded configuration.
    pub fn new(cwd: PathBuf, config: Config) -> Self {
        Self {
            cwd,
            config,
            corpus: None,
            engine: SimilarityEngine::new(),
        }
    }

    /// Path of the articles file.
    pub fn articles_path(&self) -> &Path {
        &self.config.articles.path
    }

    /// Returns the corpus, reading the articles file on first use.
    pub fn corpus(&mut self) -> Result<Arc<[Article]>, ExitCode> {
        if let Some(corpus) = &self.corpus {
            return Ok(Arc::clone(corpus));
        }

        let path = self.articles_path();
        let articles = load_articles(path).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        debug!(path = %path.display(), articles = articles.len(), "loaded articles");

        let corpus: Arc<[Article]> = articles.into();
        self.corpus = Some(Arc::clone(&corpus));
        Ok(corpus)
    }

    /// Returns the neighbor snapshot for the corpus, computing it on first use.
    pub fn snapshot(&mut self) -> Result<Arc<NeighborSnapshot>, ExitCode> {
        let corpus = self.corpus()?;
        Ok(self.engine.snapshot(&corpus))
    }

    /// Builds the tagger described by the configuration.
    pub fn tagger(&self) -> Result<Tagger, ExitCode> {
        build_tagger(&self.config.tags).map_err(|e| {
            eprintln!("error: invalid tag configuration: {e}");
            ExitCode::FAILURE
        })
    }

    /// Builds the subcategory classifier described by the configuration.
    pub fn classifier(&self) -> Result<Classifier, ExitCode> {
        build_classifier(&self.config.categories).map_err(|e| {
            eprintln!("error: invalid category configuration: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Builds a tagger from the built-in vocabulary (when enabled) plus configured rules.
///
/// A configured rule replaces a built-in rule of the same name.
pub fn build_tagger(settings: &TagSettings) -> Result<Tagger, TagError> {
    let mut tagger = if settings.builtin {
        Tagger::builtin()?
    } else {
        Tagger::default()
    };
    for (name, keywords) in &settings.keywords {
        tagger.insert(KeywordRule::new(name.as_str(), keywords)?);
    }
    Ok(tagger)
}

/// Builds a classifier from the built-in categories (when enabled) plus configured rules.
///
/// A configured category replaces a built-in one of the same name in its tie-break
/// position; new categories are appended.
pub fn build_classifier(settings: &CategorySettings) -> Result<Classifier, TagError> {
    let rules = if settings.builtin {
        Classifier::builtin()?.rules().to_vec()
    } else {
        Vec::new()
    };
    let mut classifier = Classifier::new(rules, settings.fallback.as_str(), settings.replace.clone())?;
    for (name, keywords) in &settings.keywords {
        classifier.insert(KeywordRule::new(name.as_str(), keywords)?);
    }
    Ok(classifier)
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use kin_config::{ParsedConfig, merge_configs, parse_config_str};
    use kin_tags::BUILTIN_TAGS;

    use super::*;

    #[test]
    fn test_builtin_tagger_with_override() {
        let mut settings = TagSettings::default();
        settings
            .keywords
            .insert("LoRA".into(), vec!["adapter".into()]);
        settings.keywords.insert("bread".into(), vec!["sourdough".into()]);

        let tagger = build_tagger(&settings).unwrap();
        assert_eq!(tagger.rules().len(), BUILTIN_TAGS.len() + 1);

        let article = Article::new("a", "Sourdough adapter, low rank");
        assert_eq!(tagger.assign(&article), vec!["LoRA", "bread"]);
    }

    #[test]
    fn test_tagger_without_builtin() {
        let settings = TagSettings {
            builtin: false,
            keywords: [("bread".into(), vec!["levain".into()])].into_iter().collect(),
        };
        let tagger = build_tagger(&settings).unwrap();
        assert_eq!(tagger.rules().len(), 1);
    }

    #[test]
    fn test_empty_rule_is_rejected() {
        let mut settings = TagSettings::default();
        settings.keywords.insert("ghost".into(), Vec::new());
        assert_eq!(
            build_tagger(&settings).unwrap_err(),
            TagError::EmptyRule {
                name: "ghost".into()
            }
        );
    }

    #[test]
    fn test_classifier_uses_configured_fallback() {
        let settings = CategorySettings {
            builtin: false,
            fallback: "Misc".into(),
            replace: vec!["TBD".into()],
            keywords: [("Baking".into(), vec!["sourdough".into()])].into_iter().collect(),
        };
        let classifier = build_classifier(&settings).unwrap();
        assert_eq!(classifier.fallback(), "Misc");
        assert_eq!(classifier.classify(&Article::new("a", "Sourdough")), "Baking");
        assert_eq!(classifier.classify(&Article::new("b", "Quiz")), "Misc");
        assert!(classifier.needs_classification(&Article::new("c", "x").with_subcategory("TBD")));
    }

    #[test]
    fn test_configured_categories_tie_in_declaration_order() {
        let toml = "[categories]\nbuiltin = false\n\n[categories.keywords]\nZymurgy = [\"yeast\"]\nBaking = [\"yeast\"]\n";
        let parsed = ParsedConfig {
            path: PathBuf::from("/site/.kin.toml"),
            config: parse_config_str(toml, Path::new("/site/.kin.toml")).unwrap(),
        };
        let config = merge_configs(&[parsed], Path::new("/site")).unwrap();

        let classifier = build_classifier(&config.categories).unwrap();
        let names: Vec<&str> = classifier.rules().iter().map(KeywordRule::name).collect();
        assert_eq!(names, ["Zymurgy", "Baking"]);
        assert_eq!(classifier.classify(&Article::new("a", "Wild yeast")), "Zymurgy");
    }
}
