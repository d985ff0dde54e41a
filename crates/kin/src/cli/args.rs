//! Clap argument definitions for the `kin` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "kin")]
#[command(about = "Related articles and feed maintenance for a static article site")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Articles JSON file, overriding the configured path
    #[arg(long, global = true, value_name = "PATH")]
    pub articles: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Shared output format flag.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct JsonArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `kin related`.
#[derive(Args, Debug, Clone)]
pub struct RelatedCommand {
    /// Article id
    pub id: String,

    /// Include the relatedness score of each article
    #[arg(long)]
    pub scores: bool,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: JsonArgs,
}

/// Arguments for `kin map`.
#[derive(Args, Debug, Clone)]
pub struct MapCommand {
    /// Write the map to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for `kin inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Article id
    pub id: String,

    /// Number of top terms to show [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: JsonArgs,
}

/// Arguments for `kin tag`.
#[derive(Args, Debug, Clone)]
pub struct TagCommand {
    /// Report what would change without writing the articles file
    #[arg(long)]
    pub dry_run: bool,

    /// Also fill in missing subcategories
    #[arg(long)]
    pub classify: bool,
}

/// Arguments for `kin init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.kin.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `kin` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the articles most related to an article
    Related(RelatedCommand),

    /// Write the related-article map for every article as JSON
    Map(MapCommand),

    /// Show an article's top terms and how its neighbors scored
    Inspect(InspectCommand),

    /// Assign keyword tags to every article and write the feed back
    #[command(after_help = "\
Tags are recomputed from scratch: existing tags are replaced by the tags whose
keywords occur as whole words in the title, summary or body. With --classify,
articles without a subcategory (or with one listed in categories.replace) get
the best-matching category, or the fallback when nothing matches.")]
    Tag(TagCommand),

    /// Initialize kin configuration in current directory
    Init(InitCommand),

    /// Show status and validate configuration
    Status,

    /// Show effective configuration settings
    Config,
}

impl Commands {
    /// Whether the command needs the configuration loaded before it runs.
    ///
    /// `init` must work even when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Parses CLI arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
