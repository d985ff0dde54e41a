//! Locating `.kin.toml` files.
//!
//! A site may carry a `.kin.toml` at its root and more in subdirectories (for example next to
//! a scraper's output). kin collects every one between the working directory and the
//! filesystem root, then the per-user `~/.kin.toml`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::{debug, trace};

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".kin.toml";

/// Returns the config files that apply in `cwd`, nearest first.
///
/// The walk ends early at a file declaring `root = true`; the user's global file is then left
/// out. A directory that happens to be named `.kin.toml` is ignored.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            trace!(dir = %dir.display(), "no config here");
            continue;
        }
        let is_root = is_root_config(&candidate);
        debug!(path = %candidate.display(), root = is_root, "found config file");
        configs.push(candidate);
        if is_root {
            return configs;
        }
    }

    match global_config_path() {
        Some(global) if global.is_file() && !configs.contains(&global) => {
            debug!(path = %global.display(), "adding global config");
            configs.push(global);
        }
        _ => {}
    }

    configs
}

/// The per-user config file, `~/.kin.toml`, when a home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Whether `path` is the per-user config file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
