//! Behavioral properties of the similarity engine over small corpora.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::sync::Arc;

use kin_article::Article;
use kin_engine::{
    NEIGHBOR_LIMIT, SimilarityEngine, breakdown, profiles, rank, score, vectorize,
};

/// A corpus with overlapping titles, tags and categories.
fn mixed_corpus() -> Vec<Article> {
    vec![
        Article::new("ed-1", "Visualizing attention heads")
            .with_dek("An interactive explorer for transformer attention")
            .with_body("<p>Attention <b>weights</b> per head, per layer.</p>")
            .with_tags(["attention", "Transformers"])
            .with_subcategory("Visualizations"),
        Article::new("ed-2", "Attention from scratch")
            .with_summary("Deriving scaled dot-product attention")
            .with_tags(["attention"])
            .with_subcategory("Understanding Concepts"),
        Article::new("ed-3", "Dropout as ensemble")
            .with_dek("Why dropout regularizes")
            .with_body("Dropout randomly zeroes activations during training.")
            .with_tags(["dropout", "regularization"])
            .with_subcategory("Understanding Concepts"),
        Article::new("ed-4", "Batch norm cheatsheet")
            .with_body("<ul><li>batch statistics</li><li>running averages</li></ul>")
            .with_tags(["BatchNorm"])
            .with_subcategory("Cheatsheets & Notes"),
        Article::new("ed-5", "Quiz generator for transformer layers")
            .with_tags(["Transformers"])
            .with_subcategory("Generating Questions"),
        Article::new("ed-6", ""),
    ]
}

fn ids(articles: &[&Article]) -> Vec<String> {
    articles.iter().map(|a| a.id.clone()).collect()
}

#[test]
fn attention_example_ranks_identical_article_first() {
    let corpus: Arc<[Article]> = vec![
        Article::new("a", "Attention is all you need").with_tags(["Transformers"]),
        Article::new("b", "Attention is all you need").with_tags(["Transformers"]),
        Article::new("c", "Dropout regularization").with_tags(["dropout"]),
    ]
    .into();

    let engine = SimilarityEngine::new();
    assert_eq!(ids(&engine.neighbors_of("a", &corpus)), vec!["b", "c"]);

    let vectors = vectorize(&corpus);
    let profiles = profiles(&corpus, &vectors);
    let ab = breakdown(&profiles[0], &profiles[1]);
    let ac = breakdown(&profiles[0], &profiles[2]);
    assert!((ab.cosine - 1.0).abs() < 1e-12);
    assert_eq!(ab.jaccard, 1.0);
    assert_eq!(ac.cosine, 0.0);
    assert_eq!(ac.jaccard, 0.0);
    assert!(ab.combined > ac.combined);
}

#[test]
fn identical_pair_alone_has_zero_idf() {
    // With two documents, every shared term has idf ln(2/2) = 0.
    let corpus = vec![
        Article::new("a", "Attention is all you need").with_tags(["Transformers"]),
        Article::new("b", "Attention is all you need").with_tags(["Transformers"]),
    ];
    let vectors = vectorize(&corpus);
    let profiles = profiles(&corpus, &vectors);
    let result = breakdown(&profiles[0], &profiles[1]);
    assert_eq!(result.cosine, 0.0);
    assert_eq!(result.jaccard, 1.0);
}

#[test]
fn single_article_has_no_neighbors() {
    let corpus: Arc<[Article]> = vec![Article::new("solo", "Only one")].into();
    let engine = SimilarityEngine::new();
    assert!(engine.neighbors_of("solo", &corpus).is_empty());
}

#[test]
fn two_articles_are_each_others_neighbor() {
    let corpus: Arc<[Article]> = vec![
        Article::new("x", "Gradient descent"),
        Article::new("y", "Sourdough starter"),
    ]
    .into();
    let engine = SimilarityEngine::new();
    assert_eq!(ids(&engine.neighbors_of("x", &corpus)), vec!["y"]);
    assert_eq!(ids(&engine.neighbors_of("y", &corpus)), vec!["x"]);
}

#[test]
fn neighbors_are_bounded_and_exclude_self() {
    let corpus = mixed_corpus();
    let map = rank(&corpus);
    assert_eq!(map.len(), corpus.len());
    for (i, article) in corpus.iter().enumerate() {
        let neighbors = map.get(&article.id);
        assert!(neighbors.len() <= NEIGHBOR_LIMIT);
        assert!(neighbors.iter().all(|n| n.index != i));
        assert!(neighbors.iter().all(|n| corpus[n.index].id != article.id));
    }
}

#[test]
fn scores_are_symmetric_and_bounded() {
    let corpus = mixed_corpus();
    let vectors = vectorize(&corpus);
    let profiles = profiles(&corpus, &vectors);
    for (i, a) in profiles.iter().enumerate() {
        for (j, b) in profiles.iter().enumerate() {
            if i == j {
                continue;
            }
            let ab = score(a, b);
            assert_eq!(ab, score(b, a), "{i} vs {j}");
            assert!((0.0..=1.0).contains(&ab), "{i} vs {j}: {ab}");
            assert!(!ab.is_nan());
        }
    }
}

#[test]
fn empty_article_degrades_to_zero_scores() {
    let corpus = mixed_corpus();
    let vectors = vectorize(&corpus);
    let empty = vectors.vector(5).unwrap();
    assert!(empty.is_empty());

    let profiles = profiles(&corpus, &vectors);
    for other in &profiles[..5] {
        assert_eq!(score(&profiles[5], other), 0.0);
    }
}

#[test]
fn attention_articles_find_each_other() {
    let corpus: Arc<[Article]> = mixed_corpus().into();
    let engine = SimilarityEngine::new();
    let related = ids(&engine.neighbors_of("ed-1", &corpus));
    assert_eq!(related[0], "ed-2");
    assert!(related.contains(&"ed-5".to_string()));
}

#[test]
fn unknown_id_yields_empty() {
    let corpus: Arc<[Article]> = mixed_corpus().into();
    let engine = SimilarityEngine::new();
    assert!(engine.neighbors_of("ed-404", &corpus).is_empty());
}

#[test]
fn cache_recomputes_only_for_a_new_corpus() {
    let engine = SimilarityEngine::new();
    let first: Arc<[Article]> = mixed_corpus().into();

    let before = engine.snapshot(&first);
    engine.neighbors_of("ed-1", &first);
    assert_eq!(engine.computations(), 1);

    let mut changed = mixed_corpus();
    changed[1] = Article::new("ed-2", "Sourdough hydration").with_tags(["bread"]);
    let second: Arc<[Article]> = changed.into();

    let after = engine.snapshot(&second);
    assert_eq!(engine.computations(), 2);
    assert_ne!(before.neighbors(), after.neighbors());

    // The old snapshot stays valid for readers that still hold it.
    assert_eq!(before.related("ed-1")[0].id, "ed-2");
}
