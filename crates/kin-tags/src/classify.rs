//! Subcategory classification by keyword hit counts.

use std::collections::BTreeMap;

use kin_article::Article;
use kin_text::strip_markup;
use tracing::debug;

use crate::{BUILTIN_CATEGORIES, DEFAULT_FALLBACK, DEFAULT_REPLACE, KeywordRule, TagError};

/// Outcome of classifying a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyReport {
    /// Articles processed.
    pub total: usize,
    /// Articles whose subcategory was (re)assigned.
    pub classified: usize,
    /// Assigned subcategory counts.
    pub assigned: BTreeMap<String, usize>,
}

/// Picks a subcategory for articles that lack a meaningful one.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Category rules in tie-break order.
    rules: Vec<KeywordRule>,
    /// Category used when nothing matches.
    fallback: String,
    /// Existing subcategories that count as unassigned.
    replace: Vec<String>,
}

impl Classifier {
    /// Creates a classifier.
    pub fn new(
        rules: Vec<KeywordRule>,
        fallback: impl Into<String>,
        replace: Vec<String>,
    ) -> Result<Self, TagError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(TagError::EmptyName);
        }
        Ok(Self {
            rules,
            fallback,
            replace,
        })
    }

    /// Creates a classifier with the built-in categories and defaults.
    pub fn builtin() -> Result<Self, TagError> {
        let rules = builtin_rules()?;
        Self::new(
            rules,
            DEFAULT_FALLBACK,
            DEFAULT_REPLACE.iter().map(ToString::to_string).collect(),
        )
    }

    /// The category rules.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Adds a category rule, replacing an existing one of the same name in place.
    ///
    /// New categories go last, so they lose ties against existing ones.
    pub fn insert(&mut self, rule: KeywordRule) {
        match self.rules.iter_mut().find(|r| r.name() == rule.name()) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// The fallback category.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Whether `article` has no subcategory or one listed for replacement.
    pub fn needs_classification(&self, article: &Article) -> bool {
        article
            .category()
            .is_none_or(|current| self.replace.iter().any(|r| r == current))
    }

    /// Returns the best-matching category for `article`.
    ///
    /// Each category scores the number of its keywords that occur anywhere in
    /// the lower-cased title and body. The highest score wins; on a tie the
    /// earlier category wins. With no hits at all the fallback is returned.
    pub fn classify(&self, article: &Article) -> &str {
        let content = format!("{} {}", article.title, strip_markup(article.body())).to_lowercase();

        let mut best: Option<(&KeywordRule, usize)> = None;
        for rule in &self.rules {
            let hits = rule.substring_hits(&content);
            if hits > 0 && best.is_none_or(|(_, top)| hits > top) {
                best = Some((rule, hits));
            }
        }

        best.map_or(self.fallback.as_str(), |(rule, _)| rule.name())
    }

    /// Assigns a subcategory to every article that needs one.
    pub fn apply(&self, articles: &mut [Article]) -> ClassifyReport {
        let mut report = ClassifyReport {
            total: articles.len(),
            ..ClassifyReport::default()
        };

        for article in articles.iter_mut() {
            if !self.needs_classification(article) {
                continue;
            }
            let category = self.classify(article).to_string();
            debug!(id = %article.id, category = %category, "classified article");
            *report.assigned.entry(category.clone()).or_default() += 1;
            report.classified += 1;
            article.subcategory = Some(category);
        }

        report
    }
}

/// Rules for the built-in categories.
fn builtin_rules() -> Result<Vec<KeywordRule>, TagError> {
    BUILTIN_CATEGORIES
        .iter()
        .map(|(name, keywords)| KeywordRule::new(*name, keywords.iter()))
        .collect()
}
