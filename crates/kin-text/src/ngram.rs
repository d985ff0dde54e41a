//! N-gram extraction.
//!
//! Unigrams and bigrams share one vocabulary: a bigram is its two tokens joined
//! by a single space, so a unigram and a bigram with the same printed text are
//! the same term.

/// Returns every contiguous window of `n` tokens joined by a single space.
///
/// Windows are produced in order without deduplication. Returns an empty
/// vector when `n` is zero or larger than the token count.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    tokens
        .windows(n)
        .map(|window| {
            window
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Returns the term pool of a token sequence: all unigrams followed by all bigrams.
pub fn terms<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut pool = ngrams(tokens, 1);
    pool.extend(ngrams(tokens, 2));
    pool
}
