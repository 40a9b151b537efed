//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod config;
mod decode;
mod encode;
mod inspect;
mod strip;

pub use config::ConfigCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;
pub use strip::StripCommand;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use invisink::config::Settings;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments and loaded settings.
    fn execute(&self, settings: &Settings) -> Result<()>;
}

/// Resolves a text argument: inline value, then file, then stdin.
pub(crate) fn read_text(
    inline: Option<&str>,
    file: Option<&PathBuf>,
    what: &str,
) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} from {}", what, path.display()));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read {} from stdin", what))?;
    Ok(text)
}

/// Writes `data` to `output`, or to stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, data: &[u8]) -> Result<()> {
    match output {
        Some(path) => fs::write(path, data)
            .with_context(|| format!("Failed to write to {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}
