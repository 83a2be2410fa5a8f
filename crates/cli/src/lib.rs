//! CLI frontend helpers for `discovery-core`.
//!
//! Commands live in [`commands`] so they can be driven from tests without
//! spawning the binary.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod commands;

/// Resolve the workspace root given on the command line to an absolute path.
///
/// A root that does not exist yet is joined onto the current directory; the
/// save command creates it.
pub fn resolve_workspace_root(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        return env::current_dir().context("Failed to get current directory");
    }
    match path.canonicalize() {
        Ok(p) => Ok(p),
        Err(_) if path.is_absolute() => Ok(path.to_path_buf()),
        Err(_) => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Ok(cwd.join(path))
        }
    }
}
