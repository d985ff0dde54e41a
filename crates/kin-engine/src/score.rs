//! Pairwise relatedness scoring.

use std::collections::HashSet;

use kin_article::Article;
use serde::Serialize;

use crate::{CATEGORY_WEIGHT, COSINE_WEIGHT, CorpusVectors, JACCARD_WEIGHT, TfIdfVector};

/// The per-article inputs to [`score`].
#[derive(Debug, Clone)]
pub struct ArticleProfile<'a> {
    /// TF-IDF vector of the article's search text.
    vector: &'a TfIdfVector,
    /// Distinct tags.
    tags: HashSet<&'a str>,
    /// Subcategory, if any.
    category: Option<&'a str>,
}

impl<'a> ArticleProfile<'a> {
    /// Builds the profile of `article` around its vector.
    pub fn new(article: &'a Article, vector: &'a TfIdfVector) -> Self {
        Self {
            vector,
            tags: article.tags.iter().map(String::as_str).collect(),
            category: article.category(),
        }
    }
}

/// Builds one profile per article, in corpus order.
///
/// `vectors` must come from [`vectorize`](crate::vectorize) over the same
/// `articles`.
pub fn profiles<'a>(articles: &'a [Article], vectors: &'a CorpusVectors) -> Vec<ArticleProfile<'a>> {
    articles
        .iter()
        .zip(vectors.vectors())
        .map(|(article, vector)| ArticleProfile::new(article, vector))
        .collect()
}

/// The three component similarities and their weighted combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// TF-IDF cosine similarity.
    pub cosine: f64,
    /// Jaccard similarity of the tag sets.
    pub jaccard: f64,
    /// 1.0 when both subcategories are present and equal, else 0.0.
    pub category: f64,
    /// Weighted combination of the above.
    pub combined: f64,
}

/// Jaccard similarity of two tag sets; zero when both are empty.
#[allow(clippy::cast_precision_loss)]
fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let shared = small.iter().filter(|tag| large.contains(*tag)).count();
    let union = a.len() + b.len() - shared;
    if union == 0 {
        return 0.0;
    }
    shared as f64 / union as f64
}

/// 1.0 when both categories are present and equal.
fn category_match(a: Option<&str>, b: Option<&str>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => 1.0,
        _ => 0.0,
    }
}

/// Computes each component and the combined score of a pair.
pub fn breakdown(a: &ArticleProfile<'_>, b: &ArticleProfile<'_>) -> ScoreBreakdown {
    let cosine = a.vector.cosine(b.vector);
    let jaccard = jaccard(&a.tags, &b.tags);
    let category = category_match(a.category, b.category);
    let combined = (COSINE_WEIGHT * cosine + JACCARD_WEIGHT * jaccard + CATEGORY_WEIGHT * category)
        .clamp(0.0, 1.0);

    ScoreBreakdown {
        cosine,
        jaccard,
        category,
        combined,
    }
}

/// Combined relatedness of a pair, in `[0, 1]`. Symmetric.
pub fn score(a: &ArticleProfile<'_>, b: &ArticleProfile<'_>) -> f64 {
    breakdown(a, b).combined
}
