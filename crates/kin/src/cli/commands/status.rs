//! Implementation of `kin status`.

use std::process::ExitCode;

use kin_article::load_articles;
use kin_config::{ConfigWarning, discover_config_files};

use super::shared::display_path;
use crate::cli::{
    context::{CommandContext, build_classifier, build_tagger},
    output::{dim, subheader, warning},
};

/// Shows configuration files, the article feed, rule counts and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;
    let config = &ctx.config;

    let config_files = discover_config_files(cwd);
    println!("{}", subheader("Config files:"));
    if config_files.is_empty() {
        println!("   {}", dim("(none, using defaults)"));
        println!(
            "   {}",
            dim(&format!("Run {} to create one.", subheader("kin init")))
        );
    } else {
        for path in &config_files {
            println!("   {}", display_path(path, cwd));
        }
    }
    println!();

    let mut failed = false;

    println!("{}", subheader("Articles:"));
    let articles_path = ctx.articles_path();
    let origin = config
        .articles
        .source
        .as_deref()
        .map_or_else(|| "default".to_string(), |p| display_path(p, cwd));
    print!(
        "   {} {}",
        display_path(articles_path, cwd),
        dim(&format!("(from {origin})"))
    );
    if articles_path.is_file() {
        match load_articles(articles_path) {
            Ok(articles) => println!(" {}", dim(&format!("{} articles", articles.len()))),
            Err(e) => {
                println!(" {}", warning("[unreadable]"));
                println!("   {}", warning(&e.to_string()));
                failed = true;
            }
        }
    } else {
        println!();
    }
    println!();

    println!("{}", subheader("Rules:"));
    match build_tagger(&config.tags) {
        Ok(tagger) => println!("   tags: {}", tagger.rules().len()),
        Err(e) => println!("   tags: {}", warning(&e.to_string())),
    }
    match build_classifier(&config.categories) {
        Ok(classifier) => println!(
            "   categories: {} {}",
            classifier.rules().len(),
            dim(&format!("(fallback: {})", classifier.fallback()))
        ),
        Err(e) => println!("   categories: {}", warning(&e.to_string())),
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return if failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .filter_map(|w| match w {
            ConfigWarning::ArticlesMissing { .. } | ConfigWarning::ArticlesNotAFile { .. } => {
                Some("Hint: set [articles] path in .kin.toml or pass --articles")
            }
            ConfigWarning::EmptyKeywordRule { .. } => {
                Some("Hint: give every keyword rule at least one keyword")
            }
            ConfigWarning::NoTagRules | ConfigWarning::NoCategoryRules => {
                Some("Hint: enable builtin rules or add a keywords table")
            }
            ConfigWarning::EmptyFallback => None,
        })
        .collect();
    hints.sort_unstable();
    hints.dedup();
    for hint in hints {
        println!("{}", dim(hint));
    }
}
