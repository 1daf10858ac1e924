//! `[site]` section configuration.
//!
//! Who the site belongs to and how its timestamps and language are
//! interpreted by the generator.

use crate::config::ConfigDiagnostics;
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// IANA zone identifiers: `UTC`, `Japan`, `EST5EDT`, `Asia/Shanghai`, `Etc/GMT+8`.
static RE_TIMEZONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_+\-]*(?:/[A-Za-z0-9_+\-]+)*$").unwrap()
});

/// BCP 47 shaped language tags: `en`, `zh`, `zh-Hans`, `pt_BR`.
static RE_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{1,8})*$").unwrap());

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Author name attributed to generated content.
    #[config(inline_doc)]
    pub author: String,

    /// Site title.
    #[config(inline_doc)]
    pub name: String,

    /// Base URL for absolute links, empty for relative links.
    #[config(inline_doc)]
    pub url: String,

    /// IANA timezone used to normalize timestamps (e.g., "Asia/Shanghai").
    #[config(default = "UTC", inline_doc)]
    pub timezone: String,

    /// Default language code (e.g., "en", "zh-Hans").
    #[config(default = "en", inline_doc)]
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            name: String::new(),
            url: String::new(),
            timezone: "UTC".into(),
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `url` is either empty or an http(s) URL with a host
    /// - `timezone` looks like an IANA zone identifier
    /// - `language` looks like a BCP 47 tag
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_url(diag);

        if !RE_TIMEZONE.is_match(&self.timezone) {
            diag.error_with_hint(
                Self::FIELDS.timezone,
                format!("'{}' is not an IANA timezone", self.timezone),
                "use a zone identifier like \"UTC\" or \"Asia/Shanghai\"",
            );
        }

        if !RE_LANGUAGE.is_match(&self.language) {
            diag.error_with_hint(
                Self::FIELDS.language,
                format!("'{}' is not a language code", self.language),
                "use a tag like \"en\", \"zh\" or \"zh-Hans\"",
            );
        }
    }

    /// Empty is valid and selects relative links.
    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if self.url.is_empty() {
            return;
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com, or \"\" for relative links",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(timezone: &str, language: &str, url: &str) -> SiteInfoConfig {
        SiteInfoConfig {
            timezone: timezone.into(),
            language: language.into(),
            url: url.into(),
            ..SiteInfoConfig::default()
        }
    }

    fn errors_for(config: &SiteInfoConfig) -> Vec<&'static str> {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag.errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(errors_for(&SiteInfoConfig::default()).is_empty());
    }

    #[test]
    fn test_timezones() {
        for tz in [
            "UTC",
            "Asia/Shanghai",
            "America/Argentina/Salta",
            "Etc/GMT+8",
            "Japan",
            "EST5EDT",
            "Zulu",
            "GMT0",
        ] {
            assert!(errors_for(&site(tz, "en", "")).is_empty(), "{tz}");
        }
        for tz in ["", "5EST", "Asia/", "/Shanghai", "Asia Shanghai"] {
            assert_eq!(errors_for(&site(tz, "en", "")), ["site.timezone"], "{tz}");
        }
    }

    #[test]
    fn test_languages() {
        for lang in ["zh", "en", "zh-Hans", "pt_BR"] {
            assert!(errors_for(&site("UTC", lang, "")).is_empty(), "{lang}");
        }
        for lang in ["", "z", "chinese", "zh-"] {
            assert_eq!(errors_for(&site("UTC", lang, "")), ["site.language"], "{lang}");
        }
    }

    #[test]
    fn test_url() {
        assert!(errors_for(&site("UTC", "en", "")).is_empty());
        assert!(errors_for(&site("UTC", "en", "https://example.com/blog")).is_empty());
        assert_eq!(
            errors_for(&site("UTC", "en", "ftp://example.com")),
            ["site.url"]
        );
        assert_eq!(errors_for(&site("UTC", "en", "example.com")), ["site.url"]);
    }
}
