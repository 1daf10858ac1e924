//! `check` command: report on a config that passed validation.

use crate::{
    config::{LinkMode, SiteConfig},
    log,
    utils::plural::plural_count,
};
use anyhow::Result;

/// Summarize a validated config.
///
/// Loading already rejected invalid files, so reaching this point means the
/// record is usable; what remains is telling the user how it will be read.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    log!("check"; "{} is valid", config.config_path.display());

    for line in summary(config) {
        log!("check"; "{}", line);
    }

    Ok(())
}

fn summary(config: &SiteConfig) -> Vec<String> {
    let links = match config.link_mode() {
        LinkMode::Relative => "links: relative".to_string(),
        LinkMode::Absolute { base, prefix } if prefix.is_empty() => {
            format!("links: absolute, under {base}")
        }
        LinkMode::Absolute { base, prefix } => {
            format!("links: absolute, under {base} (prefix /{prefix})")
        }
    };

    let enabled = config.feed.enabled();
    let feeds = if enabled.is_empty() {
        "feeds: none".to_string()
    } else {
        let names: Vec<_> = enabled.iter().map(|f| f.key()).collect();
        format!("feeds: {}", names.join(", "))
    };

    vec![
        format!("content: {}", config.content_dir().display()),
        format!(
            "pagination: {} per page",
            plural_count(config.build.pagination as usize, "item")
        ),
        links,
        feeds,
        format!(
            "blogroll: {}, social: {}",
            plural_count(config.links.len(), "link"),
            plural_count(config.social.len(), "link")
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_for_starter() {
        let lines = summary(&SiteConfig::starter());
        assert_eq!(lines[1], "pagination: 20 items per page");
        assert_eq!(lines[2], "links: relative");
        assert_eq!(lines[3], "feeds: none");
        assert_eq!(lines[4], "blogroll: 4 links, social: 2 links");
    }

    #[test]
    fn test_summary_with_feeds_and_url() {
        let mut config = SiteConfig::starter();
        config.site.url = "https://example.com/blog".into();
        config.feed.all_atom = Some("feeds/all.atom.xml".into());
        config.feed.author_rss = Some("feeds/{slug}.rss.xml".into());
        config.build.pagination = 1;

        let lines = summary(&config);
        assert_eq!(lines[1], "pagination: 1 item per page");
        assert_eq!(
            lines[2],
            "links: absolute, under https://example.com/blog (prefix /blog)"
        );
        assert_eq!(lines[3], "feeds: all_atom, author_rss");
    }
}
