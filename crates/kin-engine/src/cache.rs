//! Memoized neighbor maps.
//!
//! Ranking a corpus is quadratic, while lookups are frequent. The engine keeps
//! the most recent [`NeighborMap`] together with the corpus it was computed
//! from and reuses it for as long as callers present the *same* corpus
//! allocation. Content is never compared: a new `Arc<[Article]>` is a new
//! corpus, even if it holds equal articles.

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Instant,
};

use arc_swap::ArcSwapOption;
use kin_article::Article;
use tracing::{debug, info, trace};

use crate::{NeighborMap, profiles, rank_profiles, vectorize};

/// A neighbor map paired with the corpus it describes.
#[derive(Debug)]
pub struct NeighborSnapshot {
    /// The corpus; holding it keeps the allocation, and so its identity, alive.
    corpus: Arc<[Article]>,
    /// Ranked neighbors per article id.
    neighbors: NeighborMap,
}

impl NeighborSnapshot {
    /// The corpus this snapshot was computed from.
    pub fn corpus(&self) -> &Arc<[Article]> {
        &self.corpus
    }

    /// The neighbor map.
    pub fn neighbors(&self) -> &NeighborMap {
        &self.neighbors
    }

    /// Related articles of `id`, best first. Empty for unknown ids.
    pub fn related(&self, id: &str) -> Vec<&Article> {
        self.neighbors
            .get(id)
            .iter()
            .map(|n| &self.corpus[n.index])
            .collect()
    }

    /// Whether this snapshot was computed from `corpus`.
    fn is_for(&self, corpus: &Arc<[Article]>) -> bool {
        Arc::ptr_eq(&self.corpus, corpus)
    }
}

/// Related-article lookups backed by a single-slot cache.
///
/// The slot is swapped atomically, so concurrent readers always observe either
/// the previous snapshot or the new one, never a partial map. Two threads that
/// miss at the same time may both compute; the last store wins and both
/// results are correct.
#[derive(Debug, Default)]
pub struct SimilarityEngine {
    /// The most recent snapshot.
    slot: ArcSwapOption<NeighborSnapshot>,
    /// Number of full recomputations performed.
    computations: AtomicUsize,
}

impl SimilarityEngine {
    /// Creates an engine with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot for `corpus`, computing it on a cache miss.
    pub fn snapshot(&self, corpus: &Arc<[Article]>) -> Arc<NeighborSnapshot> {
        if let Some(cached) = self.slot.load_full()
            && cached.is_for(corpus)
        {
            trace!(articles = corpus.len(), "neighbor cache hit");
            return cached;
        }

        let fresh = Arc::new(self.compute(corpus));
        self.slot.store(Some(Arc::clone(&fresh)));
        fresh
    }

    /// Returns up to three articles related to `id`, best first.
    ///
    /// Unknown ids yield an empty list. The returned references borrow from
    /// `corpus`.
    pub fn neighbors_of<'c>(&self, id: &str, corpus: &'c Arc<[Article]>) -> Vec<&'c Article> {
        let snapshot = self.snapshot(corpus);
        snapshot
            .neighbors()
            .get(id)
            .iter()
            .map(|n| &corpus[n.index])
            .collect()
    }

    /// Drops the cached snapshot; the next lookup recomputes.
    pub fn invalidate(&self) {
        self.slot.store(None);
    }

    /// Number of full recomputations so far.
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::Relaxed)
    }

    /// Vectorizes and ranks `corpus`.
    fn compute(&self, corpus: &Arc<[Article]>) -> NeighborSnapshot {
        let started = Instant::now();
        debug!(articles = corpus.len(), "computing neighbor map");

        let vectors = vectorize(corpus);
        let neighbors = rank_profiles(corpus, &profiles(corpus, &vectors));
        self.computations.fetch_add(1, Ordering::Relaxed);

        info!(
            articles = corpus.len(),
            vocabulary = vectors.vocabulary().len(),
            elapsed_ms = started.elapsed().as_millis(),
            "computed neighbor map"
        );

        NeighborSnapshot {
            corpus: Arc::clone(corpus),
            neighbors,
        }
    }
}
