//! Site initialization module.
//!
//! Creates a new site with the starter configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration file generation

mod config;
mod structure;
mod validate;

use crate::{
    config::{ConfigError, SiteConfig},
    log,
};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new site
///
/// # Steps
/// 1. Validate the record, including `--site-url`/`--content` overrides
/// 2. Validate target directory
/// 3. Create the root and content directories
/// 4. Write the configuration file
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    // The content directory is created below, so its missing-dir warning is dropped
    site_config
        .diagnostics()
        .into_result()
        .map_err(ConfigError::Diagnostics)?;

    let template = config::generate_config_template(site_config)?;

    if dry_run {
        print!("{template}");
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    validate::validate_target(root, &site_config.config_path, mode)?;
    structure::create_structure(root, &site_config.content_dir())?;
    config::write_config(&site_config.config_path, &template)?;

    log!("init"; "site initialized at {}", root.display());
    Ok(())
}
