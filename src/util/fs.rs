//! Filesystem helpers.

use std::path::Path;

use anyhow::{Context, Result};

/// Create a directory and all of its parents if it does not exist yet.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

/// Check whether a directory exists and contains at least one entry.
pub fn dir_is_nonempty(path: &Path) -> bool {
    std::fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
