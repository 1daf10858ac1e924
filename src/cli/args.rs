//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Override site URL, e.g. for CI deployments.
    ///
    /// Keeps site.toml clean when the production URL differs from local development.
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Reject unknown fields in the config file instead of warning
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new site with a starter site.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Validate the config file
    #[command(visible_alias = "c")]
    Check,

    /// Print the value of one setting as JSON
    #[command(visible_alias = "g")]
    Get {
        /// Setting name (e.g. pagination_size) or TOML path (e.g. build.pagination)
        key: String,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Print the plain value instead of JSON
        #[arg(short, long, conflicts_with = "pretty")]
        raw: bool,
    },

    /// Print the whole resolved config
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,
    },

    /// List recognized settings and where their values come from
    #[command(visible_alias = "k")]
    Keys,
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Toml,
    Json,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["sitecfg", "check"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(cli.is_check());
        assert!(!cli.strict);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["sitecfg", "show", "-C", "blog.toml", "--strict", "-f", "json"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("blog.toml"));
        assert!(cli.strict);
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: ShowFormat::Json
            }
        ));
    }

    #[test]
    fn test_init_with_name() {
        let cli = Cli::try_parse_from(["sitecfg", "init", "my-site", "--dry"]).unwrap();
        assert!(cli.is_init());
        match cli.command {
            Commands::Init { name, dry } => {
                assert_eq!(name, Some(PathBuf::from("my-site")));
                assert!(dry);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_get_alias_and_flags() {
        let cli = Cli::try_parse_from(["sitecfg", "g", "links", "--pretty"]).unwrap();
        match cli.command {
            Commands::Get { key, pretty, raw } => {
                assert_eq!(key, "links");
                assert!(pretty);
                assert!(!raw);
            }
            _ => unreachable!(),
        }

        assert!(Cli::try_parse_from(["sitecfg", "get", "links", "-p", "-r"]).is_err());
    }

    #[test]
    fn test_no_command_is_error() {
        assert!(Cli::try_parse_from(["sitecfg"]).is_err());
    }
}
