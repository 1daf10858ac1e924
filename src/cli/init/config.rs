//! Configuration file generation.
//!
//! Renders the starter record as a commented `site.toml`.

use crate::config::{ConfigError, LinkConfig, Setting, SiteConfig};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Example paths shown for feeds that are left disabled.
const FEED_EXAMPLES: [(Setting, &str); 5] = [
    (Setting::FeedAllAtom, "feeds/all.atom.xml"),
    (Setting::FeedCategoryAtom, "feeds/{slug}.atom.xml"),
    (Setting::FeedTranslationAtom, "feeds/all-{lang}.atom.xml"),
    (Setting::FeedAuthorAtom, "feeds/{slug}.atom.xml"),
    (Setting::FeedAuthorRss, "feeds/{slug}.rss.xml"),
];

/// Theme suggested in the commented-out `theme` line.
const EXAMPLE_THEME: &str = "pelican-octopress-theme";

/// Generate site.toml content with comments.
///
/// Unset settings are written as commented-out examples, so the file parses
/// back to exactly `config`.
pub fn generate_config_template(config: &SiteConfig) -> Result<String, ConfigError> {
    let mut out = String::new();

    out.push_str(&format!(
        "# sitecfg configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site]
    out.push_str("[site]\n");
    out.push_str(&toml::to_string(&config.site)?);

    // [build]
    out.push_str("\n[build]\n");
    out.push_str(&toml::to_string(&config.build)?);
    if config.build.relative_urls.is_none() {
        out.push_str("# Uncomment following line if you want document-relative URLs when developing\n");
        out.push_str("# relative_urls = true\n");
    }
    if config.build.theme.is_none() {
        out.push_str(&format!("# theme = \"{EXAMPLE_THEME}\"\n"));
    }

    // [feed]
    out.push_str("\n# Feed generation is usually not desired when developing\n");
    out.push_str("[feed]\n");
    out.push_str(&toml::to_string(&config.feed)?);
    for (setting, example) in FEED_EXAMPLES {
        if config.value(setting).is_unset() {
            out.push_str(&format!("# {} = \"{}\"\n", setting.field().key(), example));
        }
    }

    // [[links]] / [[social]]
    out.push_str("\n# Blogroll\n");
    out.push_str(&link_tables("links", &config.links)?);
    out.push_str("\n# Social widget\n");
    out.push_str(&link_tables("social", &config.social)?);

    Ok(out)
}

/// Render a link list as an array of tables named `name`.
fn link_tables(name: &str, links: &[LinkConfig]) -> Result<String, ConfigError> {
    let mut table = toml::Table::new();
    table.insert(name.to_string(), toml::Value::try_from(links)?);
    Ok(toml::to_string(&table)?)
}

/// Write the config file, creating parent directories as needed.
pub fn write_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back_to_starter() {
        let starter = SiteConfig::starter();
        let template = generate_config_template(&starter).unwrap();
        assert_eq!(test_parse_config(&template), starter);
    }

    #[test]
    fn test_template_documents_unset_settings() {
        let template = generate_config_template(&SiteConfig::starter()).unwrap();
        assert!(template.contains("# relative_urls = true"));
        assert!(template.contains("# theme = \"pelican-octopress-theme\""));
        assert!(template.contains("# all_atom = \"feeds/all.atom.xml\""));
        assert!(template.contains("# author_rss = \"feeds/{slug}.rss.xml\""));
        assert!(template.contains("[[links]]"));
        assert!(template.contains("[[social]]"));
    }

    #[test]
    fn test_template_keeps_set_values() {
        let mut config = SiteConfig::starter();
        config.build.theme = Some("notmyidea".into());
        config.feed.all_atom = Some("feeds/all.atom.xml".into());
        config.social.clear();

        let template = generate_config_template(&config).unwrap();
        assert!(!template.contains("# theme ="));
        assert!(!template.contains("# all_atom ="));
        assert!(template.contains("# category_atom ="));
        assert_eq!(test_parse_config(&template), config);
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/site.toml");
        write_config(&path, "[site]\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[site]\n");
    }
}
