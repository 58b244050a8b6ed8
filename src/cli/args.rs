//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Docsite manifest CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Manifest file path (default: docsite.toml)
    #[arg(short = 'C', long, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site from the built-in manifest
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the manifest to stdout instead of writing files
        #[arg(short, long)]
        dry: bool,
    },

    /// Check the manifest for schema and consistency errors
    #[command(visible_alias = "c")]
    Check,

    /// Print the assembled site record
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ShowFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Stamp a specific copyright year instead of the current one
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Output format for `docsite show`.
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
    pub const fn is_show(&self) -> bool {
        matches!(self.command, Commands::Show { .. })
    }
}
