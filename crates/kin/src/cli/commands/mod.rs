//! Command implementations and dispatch.

pub mod config;
pub mod init;
pub mod inspect;
pub mod map;
pub mod related;
mod shared;
pub mod status;
pub mod tag;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Related(cmd) => related::run(ctx, &cmd),
        Commands::Map(cmd) => map::run(ctx, &cmd),
        Commands::Inspect(cmd) => inspect::run(ctx, &cmd),
        Commands::Tag(cmd) => tag::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Config => config::run(ctx),
    }
}
