//! Command-line interface for kin.

use std::{io, process::ExitCode};

use kin::cli::{
    CommandContext,
    args::{Cli, parse_cli},
    commands,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let Cli {
        command,
        articles,
        verbose,
    } = parse_cli();
    setup_tracing(verbose);

    let ctx = if command.needs_config() {
        CommandContext::load(articles.as_deref())
    } else {
        CommandContext::load_cwd_only()
    };
    let mut ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(command, &mut ctx)
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v`.
fn setup_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
