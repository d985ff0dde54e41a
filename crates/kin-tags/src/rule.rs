//! Keyword rules and matching primitives.

use regex::Regex;

use crate::TagError;

/// A named set of keywords.
///
/// Keywords are stored lower-cased. Whole-word matching goes through one
/// compiled, case-insensitive pattern per rule.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    /// Tag or category assigned when the rule matches.
    name: String,
    /// Lower-cased keywords, in declaration order.
    keywords: Vec<String>,
    /// `\b(?:k1|k2|...)\b` over the escaped keywords.
    pattern: Regex,
}

impl PartialEq for KeywordRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.keywords == other.keywords
    }
}

impl KeywordRule {
    /// Builds a rule, rejecting empty names, empty keyword lists and blank
    /// keywords.
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Result<Self, TagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TagError::EmptyName);
        }

        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        if keywords.is_empty() {
            return Err(TagError::EmptyRule { name });
        }
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(TagError::BlankKeyword { name });
        }

        let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
        let pattern = match Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|"))) {
            Ok(pattern) => pattern,
            Err(source) => return Err(TagError::Pattern { name, source }),
        };

        Ok(Self {
            name,
            keywords,
            pattern,
        })
    }

    /// The tag or category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lower-cased keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether any keyword occurs in `text` as a whole word or phrase.
    ///
    /// A word boundary sits between a word character (alphanumeric or `_`) and
    /// anything else, the text edges included. Matching ignores case.
    pub fn matches_word(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Number of distinct keywords that occur anywhere in `text`.
    pub fn substring_hits(&self, text: &str) -> usize {
        self.keywords.iter().filter(|k| text.contains(k.as_str())).count()
    }
}
