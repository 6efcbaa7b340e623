//! Embedrank CLI
//!
//! Thin command-line surface over the recommendation engine.
//!
//! # Commands
//!
//! - `recommend <user_id>`: print ranked item ids for a user
//!
//! Logging goes to stderr so stdout carries only the ranked output. Exit
//! code is 0 on success and 1 on missing arguments or failed
//! initialization.

use clap::{error::ErrorKind, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use embedrank_core::Config;

mod commands;

/// Embedrank - embedding-based item recommendations
#[derive(Parser)]
#[command(name = "embedrank")]
#[command(version = "0.1.0")]
#[command(about = "Recommend items to users by embedding similarity")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (TOML or JSON); defaults to layered
    /// config/default.* plus EMBEDRANK-prefixed environment variables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print ranked item recommendations for a user
    Recommend(commands::recommend::RecommendArgs),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                // Missing/invalid arguments exit 1, not clap's default 2
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let config = match &cli.config {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    // Setup logging: -v flags win, then RUST_LOG, then the configured level
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Recommend(args) => commands::recommend::handle_recommend(args, &config),
    };

    std::process::exit(exit_code);
}
