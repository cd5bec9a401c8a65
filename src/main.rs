use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ticket_kb::cli::{Cli, Commands, ConfigCommands};
use ticket_kb::Config;

mod commands;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "TKB_LOG";

/// Initialize stderr logging. `TKB_LOG` wins over `-v` flags.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Extract(args) => commands::extract::handle(args, &load_config(&cli)?),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(&load_config(&cli)?),
            ConfigCommands::Path => commands::config::handle_path(cli.config.as_deref()),
            ConfigCommands::Init { force } => {
                commands::config::handle_init(cli.config.as_deref(), *force)
            }
        },
        Commands::Completions { shell } => {
            commands::completions::handle(*shell);
            Ok(())
        }
    }
}
