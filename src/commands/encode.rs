//! Encode command - hide a message or file behind a cover text.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use invisink::config::Settings;
use invisink::encoder::{encode_reader, encode_with_config, CoverPolicy, EncoderConfig};

use super::{read_text, write_output, CommandExecutor};

/// Hide a message at the end of a cover text.
///
/// The message is appended as zero-width characters, so the output looks
/// exactly like the cover text. With neither --message nor --file, the
/// message is read from stdin.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Visible cover text
    #[arg(short, long, conflicts_with = "cover_file")]
    pub cover: Option<String>,

    /// Read the cover text from a file
    #[arg(long)]
    pub cover_file: Option<PathBuf>,

    /// Secret message to hide (mutually exclusive with --file)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Hide the raw bytes of this file instead of a text message
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Write the combined text here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Refuse covers that already contain zero-width markers
    #[arg(long)]
    pub reject_marked_cover: bool,
}

impl EncodeCommand {
    /// Settings-file defaults with command-line flags applied on top.
    fn encoder_config(&self, settings: &Settings) -> EncoderConfig {
        let mut config = settings.encoder_config();
        if self.reject_marked_cover {
            config.cover_policy = CoverPolicy::Reject;
        }
        config
    }
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        if self.cover.is_none() && self.cover_file.is_none() {
            anyhow::bail!("No cover text provided. Use --cover or --cover-file");
        }
        let cover = read_text(self.cover.as_deref(), self.cover_file.as_ref(), "cover text")?;

        let config = self.encoder_config(settings);

        let encoded = if let Some(message) = &self.message {
            encode_with_config(&cover, message, &config)?
        } else if let Some(path) = &self.file {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            encode_reader(&cover, file, &config)
                .with_context(|| format!("Failed to hide {}", path.display()))?
        } else {
            encode_reader(&cover, io::stdin().lock(), &config)
                .context("Failed to hide message from stdin")?
        };

        info!(
            payload_bytes = encoded.payload_bytes,
            marker_count = encoded.marker_count,
            "message hidden"
        );

        write_output(self.output.as_deref(), encoded.text.as_bytes())
    }
}
