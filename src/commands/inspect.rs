//! Inspect command - report what a text carries without decoding it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use invisink::config::Settings;
use invisink::text::inspect;

use super::{read_text, CommandExecutor};

/// Show how many markers a text carries and how many bytes they encode.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Text to inspect (reads stdin if neither this nor --input-file is given)
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub input_file: Option<PathBuf>,
}

impl CommandExecutor for InspectCommand {
    fn execute(&self, _settings: &Settings) -> Result<()> {
        let text = read_text(self.input.as_deref(), self.input_file.as_ref(), "input text")?;
        let report = inspect(&text);

        println!("Payload Report");
        println!("==============");
        println!("  Visible characters: {}", report.visible_chars);
        println!("  Marker characters:  {}", report.marker_count);
        println!("  Payload bytes:      {}", report.payload_bytes);

        if report.trailing_bits > 0 {
            println!(
                "  Trailing bits:      {} (incomplete byte, ignored on decode)",
                report.trailing_bits
            );
        }

        if !report.has_payload() {
            println!("  Status: no hidden message");
        }

        Ok(())
    }
}
