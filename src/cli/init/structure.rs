//! Site directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Create the site root and its content directory.
///
/// Existing directories are left as they are.
pub fn create_structure(root: &Path, content_dir: &Path) -> Result<()> {
    for dir in [root, content_dir] {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    }
    Ok(())
}
