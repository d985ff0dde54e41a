//! Implementation of `kin tag`.

use std::process::ExitCode;

use kin_article::save_articles;

use crate::cli::{
    args::TagCommand,
    context::CommandContext,
    output::{dim, subheader},
};

/// Recomputes tags (and optionally subcategories) and writes the feed back.
pub fn run(ctx: &mut CommandContext, cmd: &TagCommand) -> ExitCode {
    let tagger = match ctx.tagger() {
        Ok(tagger) => tagger,
        Err(code) => return code,
    };
    let classifier = if cmd.classify {
        match ctx.classifier() {
            Ok(classifier) => Some(classifier),
            Err(code) => return code,
        }
    } else {
        None
    };
    let corpus = match ctx.corpus() {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };

    let mut articles = corpus.to_vec();
    let report = tagger.apply(&mut articles);
    println!(
        "Tagged {} of {} articles ({} changed)",
        report.tagged, report.total, report.changed
    );

    if let Some(classifier) = classifier {
        let report = classifier.apply(&mut articles);
        println!("Classified {} articles", report.classified);
        if !report.assigned.is_empty() {
            println!("{}", subheader("Subcategories assigned:"));
            for (category, count) in &report.assigned {
                println!("   {category} {}", dim(&format!("({count})")));
            }
        }
    }

    if cmd.dry_run {
        println!("{}", dim("Dry run: articles file not written."));
        return ExitCode::SUCCESS;
    }

    let path = ctx.articles_path();
    if let Err(e) = save_articles(path, &articles) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    println!("Wrote {}", path.display());
    ExitCode::SUCCESS
}
