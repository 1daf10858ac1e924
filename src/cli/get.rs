//! `get` and `show` commands: read settings back out of the record.

use super::ShowFormat;
use crate::config::SiteConfig;
use anyhow::Result;

/// How a single value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    Json,
    PrettyJson,
    Raw,
}

impl ValueStyle {
    pub const fn from_flags(pretty: bool, raw: bool) -> Self {
        match (pretty, raw) {
            (_, true) => Self::Raw,
            (true, false) => Self::PrettyJson,
            (false, false) => Self::Json,
        }
    }
}

/// Print one setting.
pub fn print_setting(config: &SiteConfig, key: &str, style: ValueStyle) -> Result<()> {
    println!("{}", render_setting(config, key, style)?);
    Ok(())
}

/// Print the whole record.
pub fn print_config(config: &SiteConfig, format: ShowFormat) -> Result<()> {
    print!("{}", render_config(config, format)?);
    Ok(())
}

fn render_setting(config: &SiteConfig, key: &str, style: ValueStyle) -> Result<String> {
    let value = config.get(key)?;
    Ok(match style {
        ValueStyle::Json => serde_json::to_string(&value)?,
        ValueStyle::PrettyJson => serde_json::to_string_pretty(&value)?,
        ValueStyle::Raw => value.to_string(),
    })
}

fn render_config(config: &SiteConfig, format: ShowFormat) -> Result<String> {
    Ok(match format {
        ShowFormat::Toml => config.to_toml()?,
        ShowFormat::Json => serde_json::to_string_pretty(config)? + "\n",
    })
}
