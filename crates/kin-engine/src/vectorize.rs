//! TF-IDF vectorization of a corpus.
//!
//! Terms are interned into a [`Vocabulary`] in first-seen order, so every
//! sparse vector is a list of `(TermId, weight)` pairs sorted by id. Dot
//! products walk two such lists in lockstep, which makes every sum accumulate
//! in the same order regardless of argument order.

use std::collections::HashMap;

use kin_article::Article;
use kin_text::{Normalizer, strip_markup, terms};

use crate::{BODY_PREFIX_CHARS, TITLE_REPEAT};

/// Index of a term in a [`Vocabulary`].
pub type TermId = u32;

/// Bidirectional mapping between term strings and dense ids.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Term to id.
    ids: HashMap<String, TermId>,
    /// Id to term.
    terms: Vec<String>,
}

impl Vocabulary {
    /// Returns the id of `term`, allocating a new one on first sight.
    fn intern(&mut self, term: String) -> TermId {
        if let Some(&id) = self.ids.get(&term) {
            return id;
        }
        #[allow(clippy::cast_possible_truncation)]
        let id = self.terms.len() as TermId;
        self.terms.push(term.clone());
        self.ids.insert(term, id);
        id
    }

    /// Looks up the id of a term.
    pub fn id(&self, term: &str) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    /// Looks up the term for an id.
    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no terms have been seen.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Raw term frequencies of one document, sorted by term id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts {
    /// `(term, occurrences)` pairs.
    counts: Vec<(TermId, u32)>,
}

impl TermCounts {
    /// Builds counts from a term pool.
    fn from_ids(ids: impl IntoIterator<Item = TermId>) -> Self {
        let mut map: HashMap<TermId, u32> = HashMap::new();
        for id in ids {
            *map.entry(id).or_default() += 1;
        }
        let mut counts: Vec<_> = map.into_iter().collect();
        counts.sort_unstable_by_key(|&(id, _)| id);
        Self { counts }
    }

    /// Occurrences of a term, zero when absent.
    pub fn get(&self, id: TermId) -> u32 {
        self.counts
            .binary_search_by_key(&id, |&(term, _)| term)
            .map_or(0, |pos| self.counts[pos].1)
    }

    /// Highest occurrence count of any term, zero for an empty document.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().map(|&(_, n)| n).max().unwrap_or(0)
    }

    /// Iterates `(term, occurrences)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, u32)> + '_ {
        self.counts.iter().copied()
    }

    /// Number of distinct terms in the document.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the document has no terms.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Number of documents containing each term at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFrequency {
    /// Indexed by term id.
    counts: Vec<u32>,
}

impl DocumentFrequency {
    /// Documents containing `id`; zero for unknown ids.
    pub fn get(&self, id: TermId) -> u32 {
        self.counts.get(id as usize).copied().unwrap_or(0)
    }

    /// Counts each distinct term of a document once.
    fn observe(&mut self, doc: &TermCounts) {
        for (id, _) in doc.iter() {
            let slot = id as usize;
            if self.counts.len() <= slot {
                self.counts.resize(slot + 1, 0);
            }
            self.counts[slot] += 1;
        }
    }
}

/// Sparse TF-IDF vector with a precomputed Euclidean norm.
///
/// Entries are sorted by term id. Terms whose weight is exactly zero (those
/// that occur in every document) are not stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfIdfVector {
    /// `(term, weight)` pairs.
    entries: Vec<(TermId, f64)>,
    /// Euclidean norm of `entries`.
    norm: f64,
}

impl TfIdfVector {
    /// Builds a vector from id-sorted entries.
    fn from_sorted(entries: Vec<(TermId, f64)>) -> Self {
        let norm = entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
        Self { entries, norm }
    }

    /// Weight of a term, zero when absent.
    pub fn weight(&self, id: TermId) -> f64 {
        self.entries
            .binary_search_by_key(&id, |&(term, _)| term)
            .map_or(0.0, |pos| self.entries[pos].1)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine similarity in `[0, 1]`; zero when either vector has zero norm.
    pub fn cosine(&self, other: &Self) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        (self.dot(other) / (self.norm * other.norm)).clamp(0.0, 1.0)
    }

    /// Iterates `(term, weight)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no terms are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// TF-IDF vectors for a whole corpus, aligned with the input order.
#[derive(Debug, Clone, Default)]
pub struct CorpusVectors {
    /// Shared term dictionary.
    vocabulary: Vocabulary,
    /// Per-term document frequency.
    document_frequency: DocumentFrequency,
    /// Raw counts per document.
    counts: Vec<TermCounts>,
    /// Weighted vectors per document.
    vectors: Vec<TfIdfVector>,
}

impl CorpusVectors {
    /// Number of documents.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// The shared vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Document frequency of every term.
    pub fn document_frequency(&self) -> &DocumentFrequency {
        &self.document_frequency
    }

    /// The vector of document `doc`.
    pub fn vector(&self, doc: usize) -> Option<&TfIdfVector> {
        self.vectors.get(doc)
    }

    /// All vectors in corpus order.
    pub fn vectors(&self) -> &[TfIdfVector] {
        &self.vectors
    }

    /// Raw term counts of document `doc`.
    pub fn counts(&self, doc: usize) -> Option<&TermCounts> {
        self.counts.get(doc)
    }

    /// Weight of `term` in document `doc`; zero if either is unknown.
    pub fn weight(&self, doc: usize, term: &str) -> f64 {
        match (self.vector(doc), self.vocabulary.id(term)) {
            (Some(vector), Some(id)) => vector.weight(id),
            _ => 0.0,
        }
    }

    /// The `limit` heaviest terms of a document, heaviest first.
    ///
    /// Ties are broken by term id, which is first-seen order in the corpus.
    pub fn top_terms(&self, doc: usize, limit: usize) -> Vec<(&str, f64)> {
        let Some(vector) = self.vector(doc) else {
            return Vec::new();
        };
        let mut entries: Vec<_> = vector.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
            .into_iter()
            .take(limit)
            .filter_map(|(id, w)| self.vocabulary.term(id).map(|t| (t, w)))
            .collect()
    }
}

/// Builds the lowercased search text of an article.
///
/// The title is repeated [`TITLE_REPEAT`] times, followed by the summary (or
/// dek) and the first [`BODY_PREFIX_CHARS`] characters of the de-markup'd
/// body, all separated by single spaces.
pub fn search_text(article: &Article) -> String {
    let body = strip_markup(article.body());
    let prefix: String = body.chars().take(BODY_PREFIX_CHARS).collect();

    let mut parts = vec![article.title.as_str(); TITLE_REPEAT];
    parts.push(article.summary_text());
    parts.push(&prefix);
    parts.join(" ").to_lowercase()
}

/// Vectorizes a corpus.
///
/// For term `t` in document `d`: `tf = count(t, d) / max_count(d)` and
/// `idf = ln(N / df(t))`; the weight is their product. A document with no
/// terms gets an empty vector with norm zero.
pub fn vectorize(articles: &[Article]) -> CorpusVectors {
    let normalizer = Normalizer::new();
    let mut vocabulary = Vocabulary::default();
    let mut document_frequency = DocumentFrequency::default();

    let counts: Vec<TermCounts> = articles
        .iter()
        .map(|article| {
            let tokens = normalizer.text_tokens(&search_text(article));
            let ids: Vec<TermId> = terms(&tokens)
                .into_iter()
                .map(|term| vocabulary.intern(term))
                .collect();
            let doc = TermCounts::from_ids(ids);
            document_frequency.observe(&doc);
            doc
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let total = articles.len() as f64;

    let vectors = counts
        .iter()
        .map(|doc| {
            let max = f64::from(doc.max_count());
            let entries = doc
                .iter()
                .filter_map(|(id, n)| {
                    let tf = f64::from(n) / max;
                    let idf = (total / f64::from(document_frequency.get(id))).ln();
                    let weight = tf * idf;
                    (weight != 0.0).then_some((id, weight))
                })
                .collect();
            TfIdfVector::from_sorted(entries)
        })
        .collect();

    CorpusVectors {
        vocabulary,
        document_frequency,
        counts,
        vectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Article> {
        vec![
            Article::new("a", "Neural networks").with_summary("Deep learning basics"),
            Article::new("b", "Neural networks").with_summary("Training deep models"),
            Article::new("c", "Sourdough baking").with_summary("Bread recipes"),
        ]
    }

    #[test]
    fn test_search_text_repeats_title() {
        let article = Article::new("a", "Graph Nets")
            .with_dek("Message passing")
            .with_body("<p>Nodes &amp; edges</p>");
        assert_eq!(
            search_text(&article),
            "graph nets graph nets graph nets message passing  nodes & edges "
        );
    }

    #[test]
    fn test_search_text_truncates_body() {
        let body = "x".repeat(BODY_PREFIX_CHARS + 100);
        let article = Article::new("a", "").with_body(body);
        let text = search_text(&article);
        assert_eq!(text.trim_start().len(), BODY_PREFIX_CHARS);
    }

    #[test]
    fn test_search_text_counts_chars_not_bytes() {
        let body = "é".repeat(BODY_PREFIX_CHARS + 1);
        let article = Article::new("a", "").with_body(body);
        assert_eq!(search_text(&article).trim_start().chars().count(), BODY_PREFIX_CHARS);
    }

    #[test]
    fn test_angle_brackets_do_not_swallow_text() {
        let articles = vec![
            Article::new("a", "Bounds <x on loss")
                .with_summary("convexity notes")
                .with_body("<p>if x &lt;y then gradient descent converges &amp;lt; quickly</p>"),
            Article::new("b", "Sourdough"),
        ];
        let vectors = vectorize(&articles);
        let counts = vectors.counts(0).unwrap();
        let count = |term: &str| vectors.vocabulary().id(term).map_or(0, |id| counts.get(id));

        assert_eq!(count("bounds"), 3);
        assert_eq!(count("loss"), 3);
        assert_eq!(count("convexity"), 1);
        assert_eq!(count("gradient"), 1);
        assert_eq!(count("quickly"), 1);
        assert!(vectors.weight(0, "gradient") > 0.0);
    }

    #[test]
    fn test_document_frequency_counts_documents_once() {
        let articles = vec![
            Article::new("a", "spam spam spam"),
            Article::new("b", "eggs"),
        ];
        let vectors = vectorize(&articles);
        let id = vectors.vocabulary().id("spam").unwrap();
        assert_eq!(vectors.document_frequency().get(id), 1);
        assert_eq!(vectors.counts(0).unwrap().get(id), 9);
    }

    #[test]
    fn test_shared_terms_get_zero_weight_in_full_coverage() {
        let articles = vec![Article::new("a", "kernel"), Article::new("b", "kernel")];
        let vectors = vectorize(&articles);
        assert_eq!(vectors.weight(0, "kernel"), 0.0);
        assert!(vectors.vector(0).unwrap().is_empty());
        assert_eq!(vectors.vector(0).unwrap().norm(), 0.0);
    }

    #[test]
    fn test_weights_follow_tf_idf() {
        let vectors = vectorize(&corpus());
        // "sourdough" appears once per title repetition, as does every title
        // unigram, so tf is 1 for the max-count terms.
        let idf = (3.0_f64 / 1.0).ln();
        assert!((vectors.weight(2, "sourdough") - idf).abs() < 1e-12);
        let shared = (3.0_f64 / 2.0).ln();
        assert!((vectors.weight(0, "neural") - shared).abs() < 1e-12);
        assert!((vectors.weight(0, "neural networks") - shared).abs() < 1e-12);
        assert_eq!(vectors.weight(0, "sourdough"), 0.0);
        assert_eq!(vectors.weight(7, "neural"), 0.0);
    }

    #[test]
    fn test_empty_document_has_empty_vector() {
        let articles = vec![Article::new("a", "the and"), Article::new("b", "tensor")];
        let vectors = vectorize(&articles);
        let empty = vectors.vector(0).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.norm(), 0.0);
        assert_eq!(empty.cosine(vectors.vector(1).unwrap()), 0.0);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let vectors = vectorize(&corpus());
        let (a, b) = (vectors.vector(0).unwrap(), vectors.vector(1).unwrap());
        assert_eq!(a.cosine(b), b.cosine(a));
        assert!(a.cosine(b) > 0.0);
        assert_eq!(a.cosine(vectors.vector(2).unwrap()), 0.0);
    }

    #[test]
    fn test_vocabulary_is_first_seen_order() {
        let vectors = vectorize(&corpus());
        assert_eq!(vectors.vocabulary().term(0), Some("neural"));
        assert_eq!(vectors.vocabulary().id("networks"), Some(1));
    }

    #[test]
    fn test_top_terms() {
        let vectors = vectorize(&corpus());
        let top = vectors.top_terms(2, 2);
        assert_eq!(top.len(), 2);
        assert!(top[0].1 >= top[1].1);
        assert!(vectors.top_terms(42, 2).is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        let vectors = vectorize(&[]);
        assert!(vectors.is_empty());
        assert!(vectors.vocabulary().is_empty());
    }
}
