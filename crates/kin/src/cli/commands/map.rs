//! Implementation of `kin map`.

use std::{fs, process::ExitCode};

use serde_json::{Map, Value};

use crate::cli::{args::MapCommand, context::CommandContext};

/// Writes `{id: [related ids]}` for the whole corpus, in corpus order.
pub fn run(ctx: &mut CommandContext, cmd: &MapCommand) -> ExitCode {
    let snapshot = match ctx.snapshot() {
        Ok(snapshot) => snapshot,
        Err(code) => return code,
    };
    let corpus = snapshot.corpus();

    let mut map = Map::new();
    for (id, neighbors) in snapshot.neighbors().iter() {
        let related = neighbors
            .iter()
            .map(|n| Value::String(corpus[n.index].id.clone()))
            .collect();
        map.insert(id.to_string(), Value::Array(related));
    }

    let json = match serde_json::to_string_pretty(&map) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(path) = &cmd.output else {
        println!("{json}");
        return ExitCode::SUCCESS;
    };

    if let Err(e) = fs::write(path, format!("{json}\n")) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }
    println!("Wrote related articles for {} articles to {}", map.len(), path.display());
    ExitCode::SUCCESS
}
