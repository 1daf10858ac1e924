//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module  | TOML Section              | Purpose                              |
//! |---------|---------------------------|--------------------------------------|
//! | `site`  | `[site]`                  | Author, title, url, timezone, lang   |
//! | `build` | `[build]`                 | Content dir, pagination, theme       |
//! | `feed`  | `[feed]`                  | Atom/RSS feed toggles                |
//! | `links` | `[[links]]`, `[[social]]` | Blogroll and social widget           |

mod build;
mod feed;
mod links;
mod site;

pub use build::BuildConfig;
pub use feed::FeedConfig;
pub use links::{LinkConfig, validate_links};
pub use site::SiteInfoConfig;
