//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── build      # [build]
//! │   ├── feed       # [feed]
//! │   └── links      # [[links]], [[social]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── presence   # ConfigPresence
//! ├── key.rs         # Setting, SettingValue
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[site]`     | Author, title, url, timezone, language           |
//! | `[build]`    | Content directory, pagination, relative urls     |
//! | `[feed]`     | Atom/RSS feeds, each disabled unless given a path|
//! | `[[links]]`  | Blogroll                                         |
//! | `[[social]]` | Social widget                                    |
//!
//! The record is loaded once and passed around as `&SiteConfig`.

pub mod key;
pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

pub use key::{Setting, SettingValue};
pub use section::{BuildConfig, FeedConfig, LinkConfig, SiteInfoConfig};
pub use types::{ConfigDiagnostics, ConfigError, ConfigPresence, FieldPath};

use crate::{
    cli::{Cli, Commands},
    debug, log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Content location and page layout
    #[serde(default)]
    pub build: BuildConfig,

    /// Feed toggles
    #[serde(default)]
    pub feed: FeedConfig,

    /// Blogroll, in display order
    #[serde(default)]
    pub links: Vec<LinkConfig>,

    /// Social widget links, in display order
    #[serde(default)]
    pub social: Vec<LinkConfig>,
}

/// How the generator should write links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkMode<'a> {
    /// Document-relative links: `site.url` is empty or `relative_urls` is on.
    Relative,
    /// Absolute links under `base`; `prefix` is its path (`blog` for `https://example.com/blog/`).
    Absolute { base: &'a str, prefix: String },
}

impl SiteConfig {
    /// The record this project ships with, written by `sitecfg init`.
    pub fn starter() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteInfoConfig {
                author: "Yi Han".into(),
                name: "Thinking".into(),
                url: String::new(),
                timezone: "Asia/Shanghai".into(),
                language: "zh".into(),
            },
            build: BuildConfig {
                content: "content".into(),
                pagination: 20,
                relative_urls: None,
                theme: None,
            },
            feed: FeedConfig::default(),
            links: vec![
                LinkConfig::new("Pelican", "https://getpelican.com/"),
                LinkConfig::new("Python.org", "https://www.python.org/"),
                LinkConfig::new("Jinja2", "https://palletsprojects.com/p/jinja/"),
                LinkConfig::new("You can modify those links in your config file", "#"),
            ],
            social: vec![
                LinkConfig::new("You can add links in your config file", "#"),
                LinkConfig::new("Another social link", "#"),
            ],
        }
    }

    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            bail!(
                "config file '{}' not found, run `sitecfg init` to create a new site",
                cli.config.display()
            );
        }

        let mut config = if cli.is_init() {
            Self::starter()
        } else {
            Self::from_path(&config_path, cli.strict)?
        };

        config.config_path = config_path;
        config.finalize(cli);

        // init validates in `new_site`, where the content dir is about to exist
        if !cli.is_init() {
            config.validate()?;
        }

        debug!("config"; "loaded {}", config.config_path.display());
        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name, .. } => {
                let dir = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
                let path = dir.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cwd, &cli.config) {
                Some(path) => Ok((normalize_path(&path), true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Set the root and apply CLI overrides.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.set_root(&root);

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.site.url, cli.site_url.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are reported as warnings, or rejected with `strict`.
    pub fn from_path(path: &Path, strict: bool) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            if strict {
                return Err(ConfigError::UnknownFields(ignored));
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Serialize back to TOML. Unset settings are left out.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Content directory as an absolute path.
    ///
    /// `~` is expanded and relative paths are taken from the site root;
    /// `build.content` itself keeps the declared value.
    pub fn content_dir(&self) -> PathBuf {
        let declared = self.build.content.to_string_lossy();
        let path = PathBuf::from(shellexpand::tilde(&declared).into_owned());
        if path.is_relative() {
            normalize_path(&self.root.join(path))
        } else {
            normalize_path(&path)
        }
    }

    /// Whether generated links should be relative or absolute.
    pub fn link_mode(&self) -> LinkMode<'_> {
        if self.site.url.is_empty() || self.build.relative_urls == Some(true) {
            return LinkMode::Relative;
        }

        LinkMode::Absolute {
            base: &self.site.url,
            prefix: extract_url_path(&self.site.url).unwrap_or_default(),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect every problem in the record.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&self.content_dir(), &mut diag);
        self.feed.validate(!self.site.url.is_empty(), &mut diag);
        section::validate_links(key::LINKS, &self.links, &mut diag);
        section::validate_links(key::SOCIAL, &self.social, &mut diag);

        diag
    }

    /// Validate configuration.
    ///
    /// Prints warnings and returns all collected errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
