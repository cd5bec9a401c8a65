//! Command-line interface definition.
//!
//! Lives in the library so xtask can generate the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Version string shown by `--version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("TKB_BUILD_DATE"),
    ")"
);

/// Extract knowledge-base entries from exported support tickets.
#[derive(Debug, Parser)]
#[command(name = "tkb", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). TKB_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "TKB_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract KB entries from ticket files or directories of ticket files
    Extract(ExtractArgs),

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print shell completions to stdout
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, clap::Args)]
pub struct ExtractArgs {
    /// Ticket files (.html, .htm, .json) or directories containing them
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of sample entries in text output (default from config)
    #[arg(long, value_name = "N")]
    pub sample: Option<usize>,

    /// Process documents one at a time
    #[arg(long)]
    pub no_parallel: bool,

    /// KB-worthy activity type (repeatable, replaces configured types)
    #[arg(long = "kb-type", value_name = "TYPE")]
    pub kb_types: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-ticket counts, summary and sample entries
    Text,
    /// Full report as one JSON document
    Json,
    /// One KB entry per line
    Jsonl,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
