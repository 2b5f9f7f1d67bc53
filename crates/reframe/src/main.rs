//! Reframe CLI - renumber and transcode sequentially captured image frames.
//!
//! Finds `rgb_*.jpg` frames in a source directory, orders them by the
//! integers embedded in their names, and writes `frame_00001.png`,
//! `frame_00002.png`, ... into a destination directory.
//!
//! # Usage
//!
//! ```bash
//! # Renumber using the directories from the config file
//! reframe run
//!
//! # Override directories and preview without writing
//! reframe run --source ./captures --dest ./frames --dry-run
//!
//! # View configuration
//! reframe config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;

/// Reframe - renumber and transcode captured image frames.
#[derive(Parser, Debug)]
#[command(name = "reframe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "REFRAME_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Renumber and transcode frames
    Run(cli::run::RunArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match &cli.config {
        Some(path) if path.exists() => reframe_core::Config::load_from(path)?,
        // `config init` is allowed to target a file that doesn't exist yet
        Some(_) if matches!(cli.command, Commands::Config(_)) => reframe_core::Config::default(),
        Some(path) => anyhow::bail!("Config file not found: {}", path.display()),
        None => match reframe_core::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration. Check your config file with `reframe config path`."
                );
                reframe_core::Config::default()
            }
        },
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Reframe v{}", reframe_core::VERSION);

    match cli.command {
        Commands::Run(args) => cli::run::execute(args, config),
        Commands::Config(args) => cli::config::execute(args, config, cli.config),
    }
}
