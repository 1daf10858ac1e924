//! `keys` command: list recognized settings.

use super::Cli;
use crate::config::{ConfigError, ConfigPresence, Setting, SettingValue, SiteConfig};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::fs;

/// Where a setting's current value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Set explicitly in the config file.
    File,
    /// Overridden on the command line.
    Cli,
    /// Left out, built-in default applies.
    Default,
}

impl Source {
    const fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Cli => "cli",
            Self::Default => "default",
        }
    }
}

/// One row of the `keys` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    pub setting: Setting,
    pub source: Source,
    pub value: String,
}

pub fn list_keys(config: &SiteConfig, cli: &Cli) -> Result<()> {
    let content = fs::read_to_string(&config.config_path)
        .map_err(|err| ConfigError::Io(config.config_path.clone(), err))?;
    let presence = ConfigPresence::from_toml(&content).map_err(ConfigError::Toml)?;

    for row in key_rows(config, &presence, cli) {
        let line = format!(
            "{:<28} {:<22} {:<8} {}",
            row.setting.name(),
            row.setting.field().as_str(),
            row.source.label(),
            row.value
        );
        if row.source == Source::Default {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }

    Ok(())
}

fn key_rows(config: &SiteConfig, presence: &ConfigPresence, cli: &Cli) -> Vec<KeyRow> {
    Setting::ALL
        .into_iter()
        .map(|setting| {
            let overridden = match setting {
                Setting::ContentPath => cli.content.is_some(),
                Setting::SiteUrl => cli.site_url.is_some(),
                _ => false,
            };
            let source = if overridden {
                Source::Cli
            } else if presence.contains(setting.field().as_str()) {
                Source::File
            } else {
                Source::Default
            };

            KeyRow {
                setting,
                source,
                value: short_value(config.value(setting)),
            }
        })
        .collect()
}

/// One-line rendering; link lists collapse to their length.
fn short_value(value: SettingValue<'_>) -> String {
    match value {
        SettingValue::Links(links) => {
            crate::utils::plural::plural_count(links.len(), "link")
        }
        SettingValue::Text("") => "\"\"".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const CONTENT: &str = r##"
[site]
author = "Yi Han"
url = ""

[build]
pagination = 20

[[links]]
label = "Pelican"
url = "https://getpelican.com/"
"##;

    fn rows(args: &[&str]) -> Vec<KeyRow> {
        let cli = Cli::try_parse_from(args).unwrap();
        let config = SiteConfig::from_str(CONTENT).unwrap();
        let presence = ConfigPresence::from_toml(CONTENT).unwrap();
        key_rows(&config, &presence, &cli)
    }

    fn row(rows: &[KeyRow], setting: Setting) -> &KeyRow {
        rows.iter().find(|r| r.setting == setting).unwrap()
    }

    #[test]
    fn test_every_setting_listed_once() {
        let rows = rows(&["sitecfg", "keys"]);
        assert_eq!(rows.len(), Setting::ALL.len());
    }

    #[test]
    fn test_sources() {
        let rows = rows(&["sitecfg", "keys"]);
        assert_eq!(row(&rows, Setting::Author).source, Source::File);
        assert_eq!(row(&rows, Setting::PaginationSize).source, Source::File);
        assert_eq!(row(&rows, Setting::Links).source, Source::File);
        assert_eq!(row(&rows, Setting::Timezone).source, Source::Default);
        assert_eq!(row(&rows, Setting::SocialLinks).source, Source::Default);
        assert_eq!(row(&rows, Setting::Theme).source, Source::Default);
    }

    #[test]
    fn test_cli_override_source() {
        let rows = rows(&["sitecfg", "-U", "https://example.com", "keys"]);
        assert_eq!(row(&rows, Setting::SiteUrl).source, Source::Cli);
        assert_eq!(row(&rows, Setting::ContentPath).source, Source::Default);
    }

    #[test]
    fn test_short_values() {
        let rows = rows(&["sitecfg", "keys"]);
        assert_eq!(row(&rows, Setting::Links).value, "1 link");
        assert_eq!(row(&rows, Setting::SocialLinks).value, "0 links");
        assert_eq!(row(&rows, Setting::SiteUrl).value, "\"\"");
        assert_eq!(row(&rows, Setting::PaginationSize).value, "20");
        assert_eq!(row(&rows, Setting::FeedAllAtom).value, "(unset)");
    }
}
