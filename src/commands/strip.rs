//! Strip command - remove zero-width markers from a text.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use invisink::config::Settings;
use invisink::text::{count_markers, strip_markers};

use super::{read_text, write_output, CommandExecutor};

/// Print a text with every zero-width marker removed.
#[derive(Args, Debug)]
pub struct StripCommand {
    /// Text to clean (reads stdin if neither this nor --input-file is given)
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub input_file: Option<PathBuf>,

    /// Write the cleaned text here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for StripCommand {
    fn execute(&self, _settings: &Settings) -> Result<()> {
        let text = read_text(self.input.as_deref(), self.input_file.as_ref(), "input text")?;

        info!(removed = count_markers(&text), "stripping markers");

        write_output(self.output.as_deref(), strip_markers(&text).as_bytes())
    }
}
