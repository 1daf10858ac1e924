//! sitecfg - typed site configuration for static site generators.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, get::ValueStyle};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Check => cli::check::check_site(&config),
        Commands::Get { key, pretty, raw } => {
            cli::get::print_setting(&config, key, ValueStyle::from_flags(*pretty, *raw))
        }
        Commands::Show { format } => cli::get::print_config(&config, *format),
        Commands::Keys => cli::keys::list_keys(&config, &cli),
    }
}
