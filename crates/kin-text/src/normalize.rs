//! Token normalization.
//!
//! Turns raw article text into the token sequence used for vocabulary
//! construction. Order and repetition are preserved because both drive term
//! frequency downstream.

use crate::{Stopwords, strip_markup};

/// Minimum token length in characters. Shorter tokens are dropped.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Normalizes text into filtered tokens.
///
/// Holds its stopword set so repeated calls over a corpus share one lookup table.
#[derive(Clone, Default)]
pub struct Normalizer {
    /// Stopwords removed after splitting.
    stopwords: Stopwords,
}

impl Normalizer {
    /// Creates a normalizer with the standard stopword set.
    pub fn new() -> Self {
        Self {
            stopwords: Stopwords::new(),
        }
    }

    /// Normalizes `raw` into tokens.
    ///
    /// Markup is stripped, then the text goes through [`Self::text_tokens`].
    pub fn tokens(&self, raw: &str) -> Vec<String> {
        if raw.is_empty() {
            return Vec::new();
        }
        self.text_tokens(&strip_markup(raw))
    }

    /// Normalizes plain text into tokens, leaving `<` and `&` alone.
    ///
    /// The text is lowercased, every character that is not a letter, digit or
    /// whitespace becomes a space, and the result is split on whitespace runs.
    /// Tokens of fewer than [`MIN_TOKEN_CHARS`] characters and stopwords are
    /// dropped. Use this for text whose markup has already been stripped:
    /// stripping twice would read a decoded `&lt;` as the start of a tag.
    pub fn text_tokens(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|token| !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }
}

/// Normalizes `raw` into tokens using a fresh [`Normalizer`].
///
/// Prefer holding a [`Normalizer`] when normalizing many documents.
pub fn normalize(raw: &str) -> Vec<String> {
    Normalizer::new().tokens(raw)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        assert_eq!(
            normalize("Gradient Descent Converges"),
            vec!["gradient", "descent", "converges"]
        );
    }

    #[test]
    fn punctuation_becomes_separator() {
        assert_eq!(
            normalize("self-attention, layer_norm!"),
            vec!["self", "attention", "layer", "norm"]
        );
    }

    #[test]
    fn drops_short_tokens() {
        assert_eq!(normalize("ab abc a xy lstm"), vec!["abc", "lstm"]);
    }

    #[test]
    fn drops_stopwords() {
        assert_eq!(
            normalize("The model which they trained"),
            vec!["model", "trained"]
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  deep \t\n  learning  "), vec!["deep", "learning"]);
    }

    #[test]
    fn strips_markup_with_boundaries() {
        assert_eq!(
            normalize("<p>residual</p><p>networks</p>"),
            vec!["residual", "networks"]
        );
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize("GPT-4o has 128k context"), vec!["gpt", "128k", "context"]);
    }

    #[test]
    fn preserves_order_and_repetition() {
        assert_eq!(
            normalize("loss loss gradient loss"),
            vec!["loss", "loss", "gradient", "loss"]
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // "μPs" is three characters but four bytes.
        assert_eq!(normalize("μPs μP"), vec!["μps"]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t ").is_empty());
        assert!(normalize("!!! ,,, ...").is_empty());
    }

    #[test]
    fn text_tokens_keep_angle_brackets_as_separators() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.text_tokens("when x <y then loss &lt;z drops"),
            vec!["when", "loss", "drops"]
        );
        // The markup-aware path strips tags first.
        assert_eq!(normalizer.tokens("when x <b>loss</b>"), vec!["when", "loss"]);
    }
}
