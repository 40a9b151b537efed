//! Decode command - recover a hidden message from combined text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use invisink::config::Settings;
use invisink::decoder::{decode_with_config, DecoderConfig, Utf8Policy};

use super::{read_text, write_output, CommandExecutor};

/// Recover the message hidden in a text.
///
/// Only the zero-width markers are read; the visible text is ignored.
/// Fails if the text carries no markers at all.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Text carrying a hidden message (reads stdin if neither this nor --input-file is given)
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub input_file: Option<PathBuf>,

    /// Write the raw payload bytes to this file instead of printing text
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail on invalid UTF-8 instead of replacing it
    #[arg(long)]
    pub strict: bool,
}

impl DecodeCommand {
    /// Settings-file defaults with command-line flags applied on top.
    fn decoder_config(&self, settings: &Settings) -> DecoderConfig {
        let mut config = settings.decoder_config();
        if self.strict {
            config.utf8 = Utf8Policy::Strict;
        }
        config
    }
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        let stego = read_text(self.input.as_deref(), self.input_file.as_ref(), "input text")?;

        let config = self.decoder_config(settings);

        let decoded =
            decode_with_config(&stego, &config).context("Could not recover a message")?;

        info!(
            marker_count = decoded.marker_count,
            payload_bytes = decoded.bytes.len(),
            discarded_bits = decoded.discarded_bits,
            "message recovered"
        );

        match &self.output {
            Some(path) => write_output(Some(path.as_path()), &decoded.bytes),
            None => {
                println!("{}", decoded.message);
                Ok(())
            }
        }
    }
}
