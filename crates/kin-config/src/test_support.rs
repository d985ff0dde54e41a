//! A throwaway site tree for kin-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary site: nested directories, `.kin.toml` files and article feeds.
pub struct Site {
    /// Owned temporary root.
    root: TempDir,
}

impl Site {
    /// Creates an empty site.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// The site root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` (and its parents) under the root.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes an article feed holding a single article at `rel`.
    pub fn feed(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, r#"[{"id": "a", "title": "Attention"}]"#).unwrap();
        path
    }

    /// Writes `.kin.toml` in `rel` (the root when empty) with `body`.
    pub fn config(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, body).unwrap();
        path
    }
}
