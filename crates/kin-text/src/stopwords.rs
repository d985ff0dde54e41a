//! Stopword filtering for token normalization.
//!
//! The stopword set is fixed and English-only. Changing it changes document
//! vectors and therefore neighbor rankings, so it is not configurable.

use std::collections::HashSet;

/// A fixed English stopword filter.
///
/// Uses a `HashSet` for O(1) lookup. Words are stored lowercase; lookups are
/// expected to be made with already-normalized tokens.
#[derive(Clone)]
pub struct Stopwords {
    /// Lowercase stopwords.
    words: HashSet<&'static str>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates the standard stopword filter.
    pub fn new() -> Self {
        Self {
            words: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }

    /// Checks if a token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Returns the number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Common English function words.
///
/// Entries shorter than three characters are listed for completeness even though
/// the length filter removes them first.
static ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with", "this", "but", "they", "have",
    "had", "what", "said", "each", "which", "their", "time", "if", "up", "out", "many", "then",
    "them", "these", "so", "some", "her", "would", "make", "like", "into", "him", "two", "more",
    "very", "after", "words", "long", "than", "first", "been", "call", "who", "oil", "now", "find",
    "down", "day", "did", "get", "come", "made", "may", "part",
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_common_words() {
        let stopwords = Stopwords::new();
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("which"));
        assert!(stopwords.contains("would"));
        assert!(stopwords.contains("part"));
    }

    #[test]
    fn domain_words_are_not_stopwords() {
        let stopwords = Stopwords::new();
        assert!(!stopwords.contains("attention"));
        assert!(!stopwords.contains("dropout"));
        assert!(!stopwords.contains("all"));
        assert!(!stopwords.contains("you"));
    }

    #[test]
    fn lookup_is_exact() {
        let stopwords = Stopwords::new();
        assert!(!stopwords.contains("The"));
    }

    #[test]
    fn set_has_no_duplicates() {
        let stopwords = Stopwords::new();
        assert_eq!(stopwords.len(), ENGLISH_STOPWORDS.len());
        assert!(!stopwords.is_empty());
    }
}
