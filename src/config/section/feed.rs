//! `[feed]` section configuration.
//!
//! Each feed is enabled by giving it an output path and disabled by leaving
//! it out. Per-entity feeds take a pattern: `{slug}` is replaced with the
//! category or author slug, `{lang}` with the translation language.
//!
//! ```toml
//! [feed]
//! all_atom = "feeds/all.atom.xml"
//! category_atom = "feeds/{slug}.atom.xml"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "feed")]
pub struct FeedConfig {
    /// All posts, Atom (e.g., "feeds/all.atom.xml").
    #[config(inline_doc)]
    pub all_atom: Option<String>,

    /// Per category, Atom (e.g., "feeds/{slug}.atom.xml").
    #[config(inline_doc)]
    pub category_atom: Option<String>,

    /// Per translation language, Atom (e.g., "feeds/all-{lang}.atom.xml").
    #[config(inline_doc)]
    pub translation_atom: Option<String>,

    /// Per author, Atom (e.g., "feeds/{slug}.atom.xml").
    #[config(inline_doc)]
    pub author_atom: Option<String>,

    /// Per author, RSS (e.g., "feeds/{slug}.rss.xml").
    #[config(inline_doc)]
    pub author_rss: Option<String>,
}

impl FeedConfig {
    /// Every feed as `(field, path, placeholder)`, in declaration order.
    fn entries(&self) -> [(FieldPath, Option<&str>, Option<&'static str>); 5] {
        [
            (Self::FIELDS.all_atom, self.all_atom.as_deref(), None),
            (
                Self::FIELDS.category_atom,
                self.category_atom.as_deref(),
                Some("{slug}"),
            ),
            (
                Self::FIELDS.translation_atom,
                self.translation_atom.as_deref(),
                Some("{lang}"),
            ),
            (
                Self::FIELDS.author_atom,
                self.author_atom.as_deref(),
                Some("{slug}"),
            ),
            (
                Self::FIELDS.author_rss,
                self.author_rss.as_deref(),
                Some("{slug}"),
            ),
        ]
    }

    /// Field paths of the feeds that are switched on.
    pub fn enabled(&self) -> Vec<FieldPath> {
        self.entries()
            .into_iter()
            .filter_map(|(field, path, _)| path.map(|_| field))
            .collect()
    }

    pub fn any_enabled(&self) -> bool {
        !self.enabled().is_empty()
    }

    /// Validate feed paths.
    ///
    /// `has_site_url`: feeds carry absolute links, so enabling one without
    /// `site.url` is worth a warning.
    pub fn validate(&self, has_site_url: bool, diag: &mut ConfigDiagnostics) {
        for (field, path, placeholder) in self.entries() {
            let Some(path) = path else { continue };

            if path.trim().is_empty() {
                diag.error_with_hint(
                    field,
                    "feed path is empty",
                    format!("remove {} to disable this feed", field),
                );
                continue;
            }

            if let Some(placeholder) = placeholder
                && !path.contains(placeholder)
            {
                diag.warn_with_hint(
                    field,
                    format!("'{path}' has no {placeholder} placeholder, every feed of this kind writes the same file"),
                    format!("e.g. \"feeds/{placeholder}.atom.xml\""),
                );
            }

            if !has_site_url {
                diag.warn_with_hint(
                    field,
                    "feed is enabled but site.url is empty, feed links will be relative",
                    "set site.url, e.g.: \"https://example.com\"",
                );
            }
        }
    }
}
