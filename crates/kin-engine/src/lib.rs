//! Content similarity engine.
//!
//! For every article in a corpus, the engine finds the most topically related
//! other articles. Relatedness blends three signals:
//!
//! 1. **Text**: cosine similarity of TF-IDF vectors built from unigrams and
//!    bigrams of the title (repeated to upweight it), summary, and body prefix
//! 2. **Tags**: Jaccard similarity of the tag sets
//! 3. **Category**: a small bonus when both articles share a subcategory
//!
//! The pipeline runs leaf to root:
//!
//! - [`vectorize`] builds one sparse [`TfIdfVector`] per article
//! - [`score`] combines the three signals for a pair of [`ArticleProfile`]s
//! - [`rank`] keeps the top [`NEIGHBOR_LIMIT`] for every article
//! - [`SimilarityEngine`] memoizes the whole [`NeighborMap`] per corpus
//!
//! All computation is synchronous and pure with respect to its inputs. The
//! pairwise pass is quadratic in corpus size; callers schedule recomputation off
//! latency-sensitive paths.

#![warn(missing_docs)]

mod cache;
mod rank;
mod score;
mod vectorize;

pub use cache::{NeighborSnapshot, SimilarityEngine};
pub use rank::{Neighbor, NeighborMap, rank, rank_profiles};
pub use score::{ArticleProfile, ScoreBreakdown, breakdown, profiles, score};
pub use vectorize::{
    CorpusVectors, DocumentFrequency, TermCounts, TermId, TfIdfVector, Vocabulary, search_text,
    vectorize,
};

/// Maximum number of neighbors kept per article.
pub const NEIGHBOR_LIMIT: usize = 3;

/// How many times the title is repeated in an article's search text.
pub const TITLE_REPEAT: usize = 3;

/// Number of characters of de-markup'd body included in the search text.
pub const BODY_PREFIX_CHARS: usize = 500;

/// Weight of the TF-IDF cosine similarity in the combined score.
pub const COSINE_WEIGHT: f64 = 0.75;

/// Weight of the tag Jaccard similarity in the combined score.
pub const JACCARD_WEIGHT: f64 = 0.20;

/// Weight of the subcategory match in the combined score.
pub const CATEGORY_WEIGHT: f64 = 0.05;
