//! Implementation of `kin related`.

use std::process::ExitCode;

use serde::Serialize;

use super::shared::require_article;
use crate::cli::{
    args::RelatedCommand,
    context::CommandContext,
    output::{dim, print_json},
};

/// One related article in JSON output.
#[derive(Serialize)]
struct JsonRelated<'a> {
    /// Article id.
    id: &'a str,
    /// Article title.
    title: &'a str,
    /// Combined relatedness score, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
}

/// Prints up to three articles most related to the given one.
pub fn run(ctx: &mut CommandContext, cmd: &RelatedCommand) -> ExitCode {
    let snapshot = match ctx.snapshot() {
        Ok(snapshot) => snapshot,
        Err(code) => return code,
    };
    let corpus = snapshot.corpus();
    if let Err(code) = require_article(corpus, &cmd.id) {
        return code;
    }

    let neighbors = snapshot.neighbors().get(&cmd.id);

    if cmd.output.json {
        let related: Vec<_> = neighbors
            .iter()
            .map(|n| {
                let article = &corpus[n.index];
                JsonRelated {
                    id: &article.id,
                    title: &article.title,
                    score: cmd.scores.then_some(n.score),
                }
            })
            .collect();
        return print_json(&related);
    }

    if neighbors.is_empty() {
        println!("{}", dim("No related articles."));
        return ExitCode::SUCCESS;
    }

    for (rank, neighbor) in neighbors.iter().enumerate() {
        let article = &corpus[neighbor.index];
        let id = dim(&format!("({})", article.id));
        if cmd.scores {
            println!(
                "{}. {} {id} {}",
                rank + 1,
                article.title,
                dim(&format!("{:.3}", neighbor.score))
            );
        } else {
            println!("{}. {} {id}", rank + 1, article.title);
        }
    }

    ExitCode::SUCCESS
}
