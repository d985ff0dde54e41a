//! Implementation of `kin inspect`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use kin_engine::{ScoreBreakdown, breakdown, profiles, vectorize};
use serde::Serialize;

use super::shared::require_article;
use crate::cli::{
    args::InspectCommand,
    context::CommandContext,
    output::{dim, header, print_json, subheader},
};

/// Default number of terms shown.
const DEFAULT_TERM_LIMIT: usize = 10;

/// JSON output for `kin inspect`.
#[derive(Serialize)]
struct JsonInspect<'a> {
    /// Article id.
    id: &'a str,
    /// Article title.
    title: &'a str,
    /// Subcategory, if any.
    subcategory: Option<&'a str>,
    /// Article tags.
    tags: &'a [String],
    /// Heaviest TF-IDF terms.
    terms: Vec<JsonTerm<'a>>,
    /// Ranked neighbors with their score components.
    neighbors: Vec<JsonNeighbor<'a>>,
}

/// A weighted term.
#[derive(Serialize)]
struct JsonTerm<'a> {
    /// Term text; bigrams contain a space.
    term: &'a str,
    /// TF-IDF weight.
    weight: f64,
}

/// A neighbor and how it scored.
#[derive(Serialize)]
struct JsonNeighbor<'a> {
    /// Neighbor id.
    id: &'a str,
    /// Neighbor title.
    title: &'a str,
    /// Score components.
    scores: ScoreBreakdown,
}

/// Shows an article's heaviest terms and the score breakdown for each neighbor.
pub fn run(ctx: &mut CommandContext, cmd: &InspectCommand) -> ExitCode {
    let snapshot = match ctx.snapshot() {
        Ok(snapshot) => snapshot,
        Err(code) => return code,
    };
    let corpus = snapshot.corpus();
    let doc = match require_article(corpus, &cmd.id) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    let vectors = vectorize(corpus);
    let profiles = profiles(corpus, &vectors);
    let article = &corpus[doc];
    let terms = vectors.top_terms(doc, cmd.limit.unwrap_or(DEFAULT_TERM_LIMIT));
    let neighbors: Vec<_> = snapshot
        .neighbors()
        .get(&cmd.id)
        .iter()
        .map(|n| JsonNeighbor {
            id: &corpus[n.index].id,
            title: &corpus[n.index].title,
            scores: breakdown(&profiles[doc], &profiles[n.index]),
        })
        .collect();

    let output = JsonInspect {
        id: &article.id,
        title: &article.title,
        subcategory: article.category(),
        tags: &article.tags,
        terms: terms
            .into_iter()
            .map(|(term, weight)| JsonTerm { term, weight })
            .collect(),
        neighbors,
    };

    if cmd.output.json {
        return print_json(&output);
    }

    print_inspect(&output);
    ExitCode::SUCCESS
}

/// Renders inspect output for the terminal.
fn print_inspect(output: &JsonInspect<'_>) {
    println!("{}", header(output.title));
    println!("{}", dim(&format!("id: {}", output.id)));
    println!(
        "{}",
        dim(&format!(
            "subcategory: {}",
            output.subcategory.unwrap_or("(none)")
        ))
    );
    if output.tags.is_empty() {
        println!("{}", dim("tags: (none)"));
    } else {
        println!("{}", dim(&format!("tags: {}", output.tags.join(", "))));
    }
    println!();

    println!("{}", subheader("Top terms:"));
    if output.terms.is_empty() {
        println!("   {}", dim("(no weighted terms)"));
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Term", "Weight"]);
        for term in &output.terms {
            table.add_row(vec![
                Cell::new(term.term),
                Cell::new(format!("{:.4}", term.weight)),
            ]);
        }
        println!("{table}");
    }
    println!();

    println!("{}", subheader("Related:"));
    if output.neighbors.is_empty() {
        println!("   {}", dim("(none)"));
        return;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Article", "Cosine", "Jaccard", "Category", "Score"]);
    for neighbor in &output.neighbors {
        let scores = &neighbor.scores;
        table.add_row(vec![
            Cell::new(format!("{} ({})", neighbor.title, neighbor.id)),
            Cell::new(format!("{:.3}", scores.cosine)),
            Cell::new(format!("{:.3}", scores.jaccard)),
            Cell::new(format!("{:.0}", scores.category)),
            Cell::new(format!("{:.3}", scores.combined)),
        ]);
    }
    println!("{table}");
}
