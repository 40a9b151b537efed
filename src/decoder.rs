//! Message decoding.
//!
//! This module reverses the encoder:
//! 1. Keep only marker characters, in order, as bits
//! 2. Pack bits into bytes, most significant bit first
//! 3. Drop a trailing group of fewer than eight bits
//! 4. Decode the bytes as UTF-8 (lenient or strict)
//!
//! Unlike a silent empty result, a text with no markers at all is an
//! error: [`DecoderError::NoHiddenMessage`].

use std::borrow::Cow;
use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::text::collect_markers;

/// Errors that can occur during decoding.
#[derive(Error, Debug)]
pub enum DecoderError {
    /// The text carries no marker characters at all.
    #[error("No hidden message found in the text")]
    NoHiddenMessage,

    /// The payload is not valid UTF-8 and the strict policy is in effect.
    #[error("Decoding failed: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// How to treat payload bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Utf8Policy {
    /// Replace invalid sequences with U+FFFD.
    #[default]
    Lenient,
    /// Fail with [`DecoderError::InvalidUtf8`].
    Strict,
}

/// Configuration for the decoder.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    pub utf8: Utf8Policy,
}

/// Result of decoding a message.
#[derive(Debug, Clone)]
pub struct DecodedMessage {
    /// The recovered message.
    pub message: String,
    /// The raw payload bytes behind `message`.
    pub bytes: Vec<u8>,
    /// Marker characters found in the input.
    pub marker_count: usize,
    /// Trailing bits that did not form a whole byte.
    pub discarded_bits: usize,
    /// True if invalid UTF-8 was replaced.
    pub lossy: bool,
}

/// Recovers the message hidden in `stego`.
///
/// Invalid UTF-8 in the payload is replaced rather than rejected.
pub fn decode(stego: &str) -> Result<String, DecoderError> {
    decode_with_config(stego, &DecoderConfig::default()).map(|decoded| decoded.message)
}

/// Decodes a message with custom configuration.
pub fn decode_with_config(
    stego: &str,
    config: &DecoderConfig,
) -> Result<DecodedMessage, DecoderError> {
    let (bytes, marker_count, discarded_bits) = extract_payload(stego)?;

    let (message, lossy) = match config.utf8 {
        Utf8Policy::Strict => (String::from_utf8(bytes.clone())?, false),
        Utf8Policy::Lenient => match String::from_utf8_lossy(&bytes) {
            Cow::Borrowed(valid) => (valid.to_string(), false),
            Cow::Owned(replaced) => {
                warn!(
                    payload_bytes = bytes.len(),
                    "payload is not valid UTF-8, invalid sequences replaced"
                );
                (replaced, true)
            }
        },
    };

    Ok(DecodedMessage {
        message,
        bytes,
        marker_count,
        discarded_bits,
        lossy,
    })
}

/// Recovers the raw payload bytes hidden in `stego`.
pub fn decode_bytes(stego: &str) -> Result<Vec<u8>, DecoderError> {
    extract_payload(stego).map(|(bytes, _, _)| bytes)
}

/// Returns the complete payload bytes, the marker count and the number
/// of discarded tail bits.
fn extract_payload(stego: &str) -> Result<(Vec<u8>, usize, usize), DecoderError> {
    let packer = collect_markers(stego);
    let marker_count = packer.total_bits();

    if marker_count == 0 {
        return Err(DecoderError::NoHiddenMessage);
    }

    let discarded_bits = packer.pending_bits();
    if discarded_bits > 0 {
        warn!(
            marker_count,
            discarded_bits, "marker count is not a multiple of 8, dropping trailing bits"
        );
    }

    let bytes = packer.finish();
    debug!(marker_count, payload_bytes = bytes.len(), "extracted payload");

    Ok((bytes, marker_count, discarded_bits))
}
