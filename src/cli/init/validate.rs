//! Pre-initialization validation.
//!
//! Validates target directory state before site creation.

use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `sitecfg init` - initialize in current directory (must have no config yet)
    CurrentDir,
    /// `sitecfg init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: an existing site's content may already be there, but the
///   config file must not
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, config_path: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if config_path.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Use `sitecfg init <name>` to create in a new subdirectory.",
                    config_path.display()
                );
            }
            if root.exists() && !root.is_dir() {
                bail!("'{}' is not a directory.", root.display());
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("site.toml");
        assert!(validate_target(temp.path(), &config, InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_existing_content_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("content")).unwrap();
        let config = temp.path().join("site.toml");
        assert!(validate_target(temp.path(), &config, InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_existing_config_current_mode() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, "").unwrap();
        assert!(validate_target(temp.path(), &config, InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("site.toml");
        assert!(validate_target(temp.path(), &config, InitMode::NewDir).is_err());
    }

    #[test]
    fn test_non_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_site");
        let config = new_path.join("site.toml");
        assert!(validate_target(&new_path, &config, InitMode::NewDir).is_ok());
    }
}
