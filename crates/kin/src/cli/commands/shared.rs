//! Shared helpers for command implementations.

use std::{path::Path, process::ExitCode};

use kin_article::Article;

/// Position of the article with `id`, or an error for unknown ids.
///
/// With repeated ids the last occurrence is the one that counts.
pub fn require_article(corpus: &[Article], id: &str) -> Result<usize, ExitCode> {
    corpus.iter().rposition(|a| a.id == id).ok_or_else(|| {
        eprintln!("error: no article with id '{id}'");
        ExitCode::FAILURE
    })
}

/// Formats `path` relative to `base` when it lies below it.
pub fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .map_or_else(|| path.display().to_string(), |rel| rel.display().to_string())
}
