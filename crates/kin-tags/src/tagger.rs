//! Keyword-based tag assignment.

use kin_article::Article;
use kin_text::strip_markup;
use tracing::debug;

use crate::{BUILTIN_TAGS, KeywordRule, TagError};

/// Outcome of tagging a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagReport {
    /// Articles processed.
    pub total: usize,
    /// Articles that received at least one tag.
    pub tagged: usize,
    /// Articles whose tag list differs from before.
    pub changed: usize,
}

/// Assigns tags to articles from keyword rules.
#[derive(Debug, Clone, Default)]
pub struct Tagger {
    /// Rules in declaration order.
    rules: Vec<KeywordRule>,
}

impl Tagger {
    /// Creates a tagger from rules.
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// Creates a tagger with the built-in vocabulary.
    pub fn builtin() -> Result<Self, TagError> {
        let rules = BUILTIN_TAGS
            .iter()
            .map(|(tag, keywords)| KeywordRule::new(*tag, keywords.iter()))
            .collect::<Result<_, _>>()?;
        Ok(Self::new(rules))
    }

    /// The tagging rules.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Adds or replaces a rule by name.
    pub fn insert(&mut self, rule: KeywordRule) {
        match self.rules.iter_mut().find(|r| r.name() == rule.name()) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Returns the tags whose keywords occur in `article`, sorted.
    pub fn assign(&self, article: &Article) -> Vec<String> {
        let text = matching_text(article);
        let mut tags: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| rule.matches_word(&text))
            .map(|rule| rule.name().to_string())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// Overwrites every article's tags with the assigned ones.
    pub fn apply(&self, articles: &mut [Article]) -> TagReport {
        let mut report = TagReport {
            total: articles.len(),
            ..TagReport::default()
        };

        for article in articles.iter_mut() {
            let tags = self.assign(article);
            if !tags.is_empty() {
                report.tagged += 1;
            }
            if tags != article.tags {
                report.changed += 1;
                debug!(id = %article.id, tags = ?tags, "assigned tags");
            }
            article.tags = tags;
        }

        report
    }
}

/// Title, summary and de-markup'd body, lower-cased with whitespace collapsed.
fn matching_text(article: &Article) -> String {
    let body = strip_markup(article.body());
    [article.title.as_str(), article.summary_text(), body.as_str()]
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
