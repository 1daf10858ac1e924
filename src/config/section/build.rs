//! `[build]` section configuration.
//!
//! Where the generator finds content and how it lays pages out.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildConfig {
    /// Content directory, relative to the config file.
    #[config(default = "content", inline_doc)]
    pub content: PathBuf,

    /// Number of items listed on one index page.
    #[config(default = "10", inline_doc)]
    pub pagination: u32,

    /// Force document-relative URLs, useful when developing.
    #[config(inline_doc)]
    pub relative_urls: Option<bool>,

    /// Theme name or path.
    #[config(inline_doc)]
    pub theme: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            pagination: 10,
            relative_urls: None,
            theme: None,
        }
    }
}

impl BuildConfig {
    /// Validate build settings.
    ///
    /// `content_dir` is `content` resolved against the site root.
    pub fn validate(&self, content_dir: &Path, diag: &mut ConfigDiagnostics) {
        if self.pagination == 0 {
            diag.error_with_hint(
                Self::FIELDS.pagination,
                "must be greater than zero",
                "e.g.: pagination = 20",
            );
        }

        if self.content.as_os_str().is_empty() {
            diag.error(Self::FIELDS.content, "content directory is not set");
        } else if !content_dir.is_dir() {
            diag.warn(
                Self::FIELDS.content,
                format!("directory '{}' does not exist", content_dir.display()),
            );
        }

        if let Some(theme) = &self.theme
            && theme.trim().is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.theme,
                "theme name is empty",
                "remove the field to use the generator's default theme",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn validate(config: &BuildConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&config.content, &mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.content, PathBuf::from("content"));
        assert_eq!(config.pagination, 10);
        assert!(config.relative_urls.is_none());
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_zero_pagination() {
        let temp = TempDir::new().unwrap();
        let config = BuildConfig {
            content: temp.path().to_path_buf(),
            pagination: 0,
            ..BuildConfig::default()
        };
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "build.pagination");
    }

    #[test]
    fn test_missing_content_is_warning() {
        let temp = TempDir::new().unwrap();
        let config = BuildConfig {
            content: temp.path().join("missing"),
            pagination: 20,
            ..BuildConfig::default()
        };
        let diag = validate(&config);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].field.as_str(), "build.content");
    }

    #[test]
    fn test_empty_theme() {
        let temp = TempDir::new().unwrap();
        let config = BuildConfig {
            content: temp.path().to_path_buf(),
            theme: Some("  ".into()),
            ..BuildConfig::default()
        };
        assert_eq!(validate(&config).errors()[0].field.as_str(), "build.theme");
    }
}
