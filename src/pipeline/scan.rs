//! Directory scan: the flat list of regular files to process.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// List the regular files directly under `dir` (no recursion, no extension
/// filtering). Entries whose metadata cannot be read (e.g. broken symlinks)
/// are excluded. Fails only when the directory itself cannot be listed.
pub fn list_regular_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory '{}'", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in '{}'", dir.display()))?;
        let path = entry.path();
        // Follows symlinks, like the rest of the pipeline does on open.
        if fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false) {
            files.push(path);
        }
    }
    Ok(files)
}
