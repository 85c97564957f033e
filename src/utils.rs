use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the repository root from an optional path argument or the current directory.
/// A path naming a file (e.g. package.json) resolves to its parent directory.
pub fn find_root(path: Option<&Path>) -> Result<PathBuf> {
    let base_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let root = fs::canonicalize(&base_path)?;
    if root.is_file() {
        if let Some(parent) = root.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    Ok(root)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Remove a file if present. Returns whether anything was removed.
pub fn remove_existing(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path)?;
        return Ok(true);
    }
    Ok(false)
}
