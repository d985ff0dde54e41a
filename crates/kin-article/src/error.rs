//! Error types for article loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading or saving an article collection.
#[derive(Debug, Error)]
pub enum ArticleError {
    /// Failed to read the articles file.
    #[error("failed to read articles file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the articles file.
    #[error("failed to write articles file {path}: {source}")]
    WriteFile {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid JSON or an element is not a valid article.
    #[error("failed to parse articles file {path}: {source}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array of articles.
    #[error("articles file {path} must contain a JSON array, found {found}")]
    NotASequence {
        /// Path to the offending file.
        path: PathBuf,
        /// Kind of JSON value found instead.
        found: &'static str,
    },

    /// Failed to serialize articles back to JSON.
    #[error("failed to serialize articles: {source}")]
    Serialize {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
