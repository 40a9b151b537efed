//! invisink - hide text inside text
//!
//! A CLI for zero-width steganography. The hidden message is appended to
//! a visible cover text as invisible Unicode characters.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CommandExecutor, ConfigCommand, DecodeCommand, EncodeCommand, InspectCommand, StripCommand,
};
use invisink::config::Settings;

/// invisink - hide text inside text
///
/// Messages are stored as zero-width characters appended to a cover text.
/// There is no encryption: anyone who runs `decode` can read them.
#[derive(Parser)]
#[command(name = "invisink")]
#[command(version)]
#[command(about = "Hide messages inside ordinary text with zero-width characters")]
#[command(long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (default: ~/.invisink/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message at the end of a cover text
    Encode(EncodeCommand),

    /// Recover the message hidden in a text
    Decode(DecodeCommand),

    /// Remove all zero-width markers from a text
    Strip(StripCommand),

    /// Report markers and payload size without decoding
    Inspect(InspectCommand),

    /// Show or initialise the settings file
    Config(ConfigCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load().context("Failed to load settings")?,
    };

    init_logging(&settings, cli.verbose);

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(&settings),
        Commands::Decode(cmd) => cmd.execute(&settings),
        Commands::Strip(cmd) => cmd.execute(&settings),
        Commands::Inspect(cmd) => cmd.execute(&settings),
        Commands::Config(mut cmd) => {
            if cmd.path.is_none() {
                cmd.path = cli.config;
            }
            cmd.execute(&settings)
        }
    }
}

/// Logs go to stderr so stdout stays clean for piped output.
fn init_logging(settings: &Settings, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        settings.log_level.as_str()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
