//! Recognized settings and their current values.
//!
//! Every setting has a public name (`pagination_size`) and a TOML location
//! (`build.pagination`); lookups accept either.

use super::section::{BuildConfig, FeedConfig, LinkConfig, SiteInfoConfig};
use super::{ConfigError, FieldPath, SiteConfig};
use serde::Serialize;
use std::{fmt, path::Path, str::FromStr};

/// `[[links]]` array of tables.
pub const LINKS: FieldPath = FieldPath::new("links");

/// `[[social]]` array of tables.
pub const SOCIAL: FieldPath = FieldPath::new("social");

/// A recognized setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    Author,
    SiteName,
    SiteUrl,
    ContentPath,
    Timezone,
    DefaultLanguage,
    FeedAllAtom,
    FeedCategoryAtom,
    FeedTranslationAtom,
    FeedAuthorAtom,
    FeedAuthorRss,
    Links,
    SocialLinks,
    PaginationSize,
    RelativeUrls,
    Theme,
}

impl Setting {
    pub const ALL: [Self; 16] = [
        Self::Author,
        Self::SiteName,
        Self::SiteUrl,
        Self::ContentPath,
        Self::Timezone,
        Self::DefaultLanguage,
        Self::FeedAllAtom,
        Self::FeedCategoryAtom,
        Self::FeedTranslationAtom,
        Self::FeedAuthorAtom,
        Self::FeedAuthorRss,
        Self::Links,
        Self::SocialLinks,
        Self::PaginationSize,
        Self::RelativeUrls,
        Self::Theme,
    ];

    /// Public setting name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::SiteName => "site_name",
            Self::SiteUrl => "site_url",
            Self::ContentPath => "content_path",
            Self::Timezone => "timezone",
            Self::DefaultLanguage => "default_language",
            Self::FeedAllAtom => "feed_flags.all_atom",
            Self::FeedCategoryAtom => "feed_flags.category_atom",
            Self::FeedTranslationAtom => "feed_flags.translation_atom",
            Self::FeedAuthorAtom => "feed_flags.author_atom",
            Self::FeedAuthorRss => "feed_flags.author_rss",
            Self::Links => "links",
            Self::SocialLinks => "social_links",
            Self::PaginationSize => "pagination_size",
            Self::RelativeUrls => "relative_urls",
            Self::Theme => "theme",
        }
    }

    /// Where the setting lives in `site.toml`.
    pub const fn field(self) -> FieldPath {
        match self {
            Self::Author => SiteInfoConfig::FIELDS.author,
            Self::SiteName => SiteInfoConfig::FIELDS.name,
            Self::SiteUrl => SiteInfoConfig::FIELDS.url,
            Self::ContentPath => BuildConfig::FIELDS.content,
            Self::Timezone => SiteInfoConfig::FIELDS.timezone,
            Self::DefaultLanguage => SiteInfoConfig::FIELDS.language,
            Self::FeedAllAtom => FeedConfig::FIELDS.all_atom,
            Self::FeedCategoryAtom => FeedConfig::FIELDS.category_atom,
            Self::FeedTranslationAtom => FeedConfig::FIELDS.translation_atom,
            Self::FeedAuthorAtom => FeedConfig::FIELDS.author_atom,
            Self::FeedAuthorRss => FeedConfig::FIELDS.author_rss,
            Self::Links => LINKS,
            Self::SocialLinks => SOCIAL,
            Self::PaginationSize => BuildConfig::FIELDS.pagination,
            Self::RelativeUrls => BuildConfig::FIELDS.relative_urls,
            Self::Theme => BuildConfig::FIELDS.theme,
        }
    }
}

impl FromStr for Setting {
    type Err = ConfigError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.name() == key || s.field().as_str() == key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current value of a setting, borrowed from the record as declared.
///
/// Serializes to plain JSON; `Unset` becomes `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue<'a> {
    /// Left out, the generator applies its built-in behavior.
    Unset,
    Text(&'a str),
    Path(&'a Path),
    Integer(u32),
    Flag(bool),
    Links(&'a [LinkConfig]),
}

impl SettingValue<'_> {
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl<'a> From<Option<&'a str>> for SettingValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Unset, Self::Text)
    }
}

impl fmt::Display for SettingValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("(unset)"),
            Self::Text(text) => f.write_str(text),
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Links(links) => {
                for (i, link) in links.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}\t{}", link.label, link.url)?;
                }
                Ok(())
            }
        }
    }
}

impl SiteConfig {
    /// Current value for a recognized setting name or TOML path.
    pub fn get(&self, key: &str) -> Result<SettingValue<'_>, ConfigError> {
        Ok(self.value(key.parse()?))
    }

    pub fn value(&self, setting: Setting) -> SettingValue<'_> {
        use SettingValue::{Flag, Integer, Links, Path, Text};

        match setting {
            Setting::Author => Text(&self.site.author),
            Setting::SiteName => Text(&self.site.name),
            Setting::SiteUrl => Text(&self.site.url),
            Setting::ContentPath => Path(&self.build.content),
            Setting::Timezone => Text(&self.site.timezone),
            Setting::DefaultLanguage => Text(&self.site.language),
            Setting::FeedAllAtom => self.feed.all_atom.as_deref().into(),
            Setting::FeedCategoryAtom => self.feed.category_atom.as_deref().into(),
            Setting::FeedTranslationAtom => self.feed.translation_atom.as_deref().into(),
            Setting::FeedAuthorAtom => self.feed.author_atom.as_deref().into(),
            Setting::FeedAuthorRss => self.feed.author_rss.as_deref().into(),
            Setting::Links => Links(&self.links),
            Setting::SocialLinks => Links(&self.social),
            Setting::PaginationSize => Integer(self.build.pagination),
            Setting::RelativeUrls => self.build.relative_urls.map_or(SettingValue::Unset, Flag),
            Setting::Theme => self.build.theme.as_deref().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_fields_are_unique() {
        for (i, a) in Setting::ALL.iter().enumerate() {
            for b in &Setting::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.field(), b.field());
            }
        }
    }

    #[test]
    fn test_parse_by_name_or_field() {
        assert_eq!("pagination_size".parse::<Setting>().unwrap(), Setting::PaginationSize);
        assert_eq!("build.pagination".parse::<Setting>().unwrap(), Setting::PaginationSize);
        assert_eq!("feed_flags.author_rss".parse::<Setting>().unwrap(), Setting::FeedAuthorRss);
        assert_eq!("feed.author_rss".parse::<Setting>().unwrap(), Setting::FeedAuthorRss);
        assert_eq!("social".parse::<Setting>().unwrap(), Setting::SocialLinks);
        assert!(matches!(
            "SITENAME".parse::<Setting>(),
            Err(ConfigError::UnknownKey(key)) if key == "SITENAME"
        ));
    }

    #[test]
    fn test_every_setting_resolves() {
        let config = SiteConfig::starter();
        for setting in Setting::ALL {
            assert!(config.get(setting.name()).is_ok(), "{setting}");
            assert!(config.get(setting.field().as_str()).is_ok(), "{setting}");
        }
    }

    #[test]
    fn test_unset_values() {
        let config = SiteConfig::starter();
        assert!(config.value(Setting::FeedAllAtom).is_unset());
        assert!(config.value(Setting::RelativeUrls).is_unset());
        assert!(config.value(Setting::Theme).is_unset());
        assert!(!config.value(Setting::SiteUrl).is_unset());
    }

    #[test]
    fn test_json_shape() {
        let config = SiteConfig::starter();
        let json = |key: &str| serde_json::to_string(&config.get(key).unwrap()).unwrap();

        assert_eq!(json("pagination_size"), "20");
        assert_eq!(json("site_url"), "\"\"");
        assert_eq!(json("feed_flags.all_atom"), "null");
        assert_eq!(json("content_path"), "\"content\"");
        assert_eq!(
            json("social_links"),
            r##"[{"label":"You can add links in your config file","url":"#"},{"label":"Another social link","url":"#"}]"##
        );
    }

    #[test]
    fn test_display() {
        let config = SiteConfig::starter();
        assert_eq!(config.value(Setting::Timezone).to_string(), "Asia/Shanghai");
        assert_eq!(config.value(Setting::Theme).to_string(), "(unset)");
        assert_eq!(
            config.value(Setting::SocialLinks).to_string(),
            "You can add links in your config file\t#\nAnother social link\t#"
        );
    }
}
