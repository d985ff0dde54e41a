//! Top-k neighbor selection.

use std::collections::HashMap;

use kin_article::Article;
use serde::Serialize;

use crate::{ArticleProfile, NEIGHBOR_LIMIT, profiles, score, vectorize};

/// A related article, by position in the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    /// Index of the neighbor in the corpus slice.
    pub index: usize,
    /// Combined relatedness score.
    pub score: f64,
}

/// Ranked neighbors for every article of a corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeighborMap {
    /// `(article id, neighbors)` in corpus order.
    entries: Vec<(String, Vec<Neighbor>)>,
    /// Id to position in `entries`. A repeated id points at its last occurrence.
    index: HashMap<String, usize>,
}

impl NeighborMap {
    /// Appends the neighbors of one article.
    fn push(&mut self, id: String, neighbors: Vec<Neighbor>) {
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, neighbors));
    }

    /// Neighbors of `id`, best first. Empty for unknown ids.
    pub fn get(&self, id: &str) -> &[Neighbor] {
        match self.index.get(id) {
            Some(&pos) => &self.entries[pos].1,
            None => &[],
        }
    }

    /// Whether `id` has an entry.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates `(id, neighbors)` in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Neighbor])> + '_ {
        self.entries
            .iter()
            .map(|(id, neighbors)| (id.as_str(), neighbors.as_slice()))
    }

    /// Number of entries, one per input article.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ranks every article's neighbors from prebuilt profiles.
///
/// Each article is scored against every other article; the best
/// [`NEIGHBOR_LIMIT`] are kept, highest score first. Equal scores keep corpus
/// order. An article is never its own neighbor, but a distinct article with
/// the same id is.
pub fn rank_profiles(articles: &[Article], profiles: &[ArticleProfile<'_>]) -> NeighborMap {
    let mut map = NeighborMap::default();

    for (i, (article, current)) in articles.iter().zip(profiles).enumerate() {
        let mut scored: Vec<Neighbor> = profiles
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(j, other)| Neighbor {
                index: j,
                score: score(current, other),
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(NEIGHBOR_LIMIT);
        map.push(article.id.clone(), scored);
    }

    map
}

/// Vectorizes and ranks a corpus in one pass.
pub fn rank(articles: &[Article]) -> NeighborMap {
    let vectors = vectorize(articles);
    rank_profiles(articles, &profiles(articles, &vectors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_single_article_has_no_neighbors() {
        let map = rank(&[Article::new("only", "Lonely article")]);
        assert_eq!(map.len(), 1);
        assert!(map.contains("only"));
        assert!(map.get("only").is_empty());
    }

    #[test]
    fn test_limit_and_order() {
        let articles: Vec<_> = (0..6)
            .map(|i| Article::new(format!("a{i}"), format!("Article {i}")))
            .collect();
        let map = rank(&articles);
        for (id, neighbors) in map.iter() {
            assert_eq!(neighbors.len(), NEIGHBOR_LIMIT, "{id}");
            assert!(neighbors.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let articles: Vec<_> = (0..5)
            .map(|i| Article::new(format!("a{i}"), ""))
            .collect();
        let map = rank(&articles);
        let indices: Vec<_> = map.get("a2").iter().map(|n| n.index).collect();
        assert_eq!(indices, vec![0, 1, 3]);
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let articles = vec![
            Article::new("dup", "Convolution kernels"),
            Article::new("x", "Convolution filters"),
            Article::new("dup", "Bread baking"),
            Article::new("y", "Bread ovens"),
        ];
        let map = rank(&articles);
        assert_eq!(map.len(), 4);
        assert_eq!(map.get("dup")[0].index, 3);
    }

    #[test]
    fn test_unknown_id() {
        let map = rank(&[Article::new("a", "t"), Article::new("b", "t")]);
        assert!(map.get("zzz").is_empty());
        assert!(!map.contains("zzz"));
    }
}
