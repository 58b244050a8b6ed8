//! Docsite - a declarative site manifest for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteManifest;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let manifest = SiteManifest::load(cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&manifest, name.is_some(), *dry),
        Commands::Check => cli::check::check_manifest(&manifest),
        Commands::Show { args } => cli::show::show_site(&manifest, args),
    }
}
