//! Tracks which settings a config file sets explicitly.
//!
//! Anything absent from the file falls back to the built-in default, so
//! `sitecfg keys` uses this to tell "set in site.toml" from "default".

use rustc_hash::FxHashSet;

/// Dot-separated TOML paths present in a config file
/// (e.g. `site`, `site.author`, `links`, `links.label`).
#[derive(Debug, Clone, Default)]
pub struct ConfigPresence {
    paths: FxHashSet<String>,
}

impl ConfigPresence {
    /// Build presence set from raw TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let value: toml::Value = toml::from_str(content)?;
        let mut presence = Self::default();
        presence.collect_value("", &value);
        Ok(presence)
    }

    /// Check whether a field or section path was explicitly present.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        !path.is_empty() && self.paths.contains(path)
    }

    fn collect_value(&mut self, prefix: &str, value: &toml::Value) {
        if !prefix.is_empty() {
            self.paths.insert(prefix.to_string());
        }

        match value {
            toml::Value::Table(table) => {
                for (key, child) in table {
                    let next = if prefix.is_empty() {
                        key.to_string()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    self.collect_value(&next, child);
                }
            }
            // `[[links]]` entries share one path: `links.label`, `links.url`
            toml::Value::Array(items) => {
                for item in items {
                    if matches!(item, toml::Value::Table(_)) {
                        self.collect_value(prefix, item);
                    }
                }
            }
            _ => {}
        }
    }
}
