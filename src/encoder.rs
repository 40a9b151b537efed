//! Message encoding.
//!
//! The secret is turned into its UTF-8 bytes, each byte into eight
//! markers (most significant bit first), and the markers are appended
//! to the cover text with no separator.

use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::text::{count_markers, write_markers, BITS_PER_BYTE};

/// Errors that can occur during encoding.
#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("Encoding failed: cover text already contains {0} marker characters")]
    MarkedCover(usize),

    #[error("Encoding failed: {0}")]
    Io(#[from] std::io::Error),
}

/// What to do when the cover text already contains marker characters.
///
/// Decoding cannot tell such characters apart from the payload, so a
/// marked cover corrupts the recovered message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverPolicy {
    /// Encode anyway.
    #[default]
    Allow,
    /// Fail with [`EncoderError::MarkedCover`].
    Reject,
}

/// Configuration for the encoder.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    pub cover_policy: CoverPolicy,
}

/// Result of encoding a message.
#[derive(Debug, Clone)]
pub struct EncodedMessage {
    /// Cover text followed by the invisible payload.
    pub text: String,
    /// Number of payload bytes hidden.
    pub payload_bytes: usize,
    /// Number of marker characters appended.
    pub marker_count: usize,
}

/// Hides `secret` at the end of `cover`.
///
/// An empty secret returns the cover unchanged.
pub fn encode(cover: &str, secret: &str) -> Result<String, EncoderError> {
    encode_with_config(cover, secret, &EncoderConfig::default()).map(|encoded| encoded.text)
}

/// Encodes a message with custom configuration.
pub fn encode_with_config(
    cover: &str,
    secret: &str,
    config: &EncoderConfig,
) -> Result<EncodedMessage, EncoderError> {
    encode_bytes_with_config(cover, secret.as_bytes(), config)
}

/// Hides arbitrary bytes at the end of `cover`.
pub fn encode_bytes(cover: &str, secret: &[u8]) -> String {
    append_payload(cover, secret).text
}

/// Encodes raw bytes with custom configuration.
pub fn encode_bytes_with_config(
    cover: &str,
    secret: &[u8],
    config: &EncoderConfig,
) -> Result<EncodedMessage, EncoderError> {
    // Nothing is appended for an empty secret, so the cover is returned as-is
    if config.cover_policy == CoverPolicy::Reject && !secret.is_empty() {
        let existing = count_markers(cover);
        if existing > 0 {
            return Err(EncoderError::MarkedCover(existing));
        }
    }

    Ok(append_payload(cover, secret))
}

/// Reads the secret from `reader` and hides it at the end of `cover`.
pub fn encode_reader<R: Read>(
    cover: &str,
    mut reader: R,
    config: &EncoderConfig,
) -> Result<EncodedMessage, EncoderError> {
    let mut secret = Vec::new();
    reader.read_to_end(&mut secret)?;
    encode_bytes_with_config(cover, &secret, config)
}

fn append_payload(cover: &str, secret: &[u8]) -> EncodedMessage {
    let mut text = String::from(cover);
    write_markers(&mut text, secret);

    let marker_count = secret.len() * BITS_PER_BYTE;
    debug!(
        cover_chars = cover.chars().count(),
        payload_bytes = secret.len(),
        marker_count,
        "encoded payload"
    );

    EncodedMessage {
        text,
        payload_bytes: secret.len(),
        marker_count,
    }
}
