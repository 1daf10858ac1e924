//! Typed TOML field paths.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// Dot-separated location of a field inside `site.toml`.
///
/// Generated for every section by `#[derive(Config)]`:
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "build")]
/// pub struct BuildConfig {
///     pub pagination: u32,
/// }
///
/// diag.error(BuildConfig::FIELDS.pagination, "must be greater than zero");
/// // [build.pagination]
/// // → must be greater than zero
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Last path component (`pagination` for `build.pagination`).
    pub fn key(&self) -> &'static str {
        self.0.rsplit_once('.').map_or(self.0, |(_, key)| key)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |q| q.bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
