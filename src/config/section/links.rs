//! `[[links]]` and `[[social]]` link lists.
//!
//! Both are arrays of tables; the generator renders them in the order they
//! are declared.
//!
//! ```toml
//! [[links]]
//! label = "Pelican"
//! url = "https://getpelican.com/"
//!
//! [[social]]
//! label = "You can add links in your config file"
//! url = "#"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// One `(label, url)` entry of a link list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Text shown for the link.
    pub label: String,

    /// Target, may be a placeholder such as "#".
    pub url: String,
}

impl LinkConfig {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Validate a link list declared under `list`.
///
/// Labels must be non-blank. URLs may be placeholders or relative, but
/// anything with a scheme separator has to parse.
pub fn validate_links(list: FieldPath, links: &[LinkConfig], diag: &mut ConfigDiagnostics) {
    for (i, link) in links.iter().enumerate() {
        let entry = i + 1;

        if link.label.trim().is_empty() {
            diag.error_with_hint(
                list,
                format!("entry #{entry} has an empty label"),
                "every link needs text to display",
            );
        }

        if link.url.is_empty() {
            diag.warn_with_hint(
                list,
                format!("entry #{entry} ('{}') has an empty url", link.label),
                "use \"#\" as a placeholder",
            );
        } else if link.url.contains("://")
            && let Err(e) = url::Url::parse(&link.url)
        {
            diag.error(
                list,
                format!("entry #{entry} ('{}'): invalid URL: {e}", link.label),
            );
        }
    }
}
