//! Scanning combined text for marker characters.
//!
//! Markers are collected from anywhere in the text, in order. Nothing
//! distinguishes payload markers from identical characters that were
//! already in the cover text; both are read the same way.

use super::alphabet::{is_marker, marker_to_bit};
use super::bits::{BytePacker, BITS_PER_BYTE};

/// Feeds every marker in `text` into a fresh [`BytePacker`].
pub fn collect_markers(text: &str) -> BytePacker {
    let mut packer = BytePacker::new();
    packer.extend(text.chars().filter_map(marker_to_bit));
    packer
}

/// Number of marker characters in `text`.
pub fn count_markers(text: &str) -> usize {
    text.chars().filter(|&c| is_marker(c)).count()
}

/// True if `text` contains at least one marker character.
pub fn has_hidden_message(text: &str) -> bool {
    text.chars().any(is_marker)
}

/// Returns `text` with every marker character removed.
pub fn strip_markers(text: &str) -> String {
    text.chars().filter(|&c| !is_marker(c)).collect()
}

/// Summary of what a text carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadReport {
    /// Characters that are not markers.
    pub visible_chars: usize,
    /// Marker characters found.
    pub marker_count: usize,
    /// Complete bytes the markers encode.
    pub payload_bytes: usize,
    /// Markers past the last complete byte (lost on decode).
    pub trailing_bits: usize,
}

impl PayloadReport {
    /// True if there is at least one marker.
    pub fn has_payload(&self) -> bool {
        self.marker_count > 0
    }
}

/// Counts visible characters and markers in one pass.
pub fn inspect(text: &str) -> PayloadReport {
    let (marker_count, visible_chars) =
        text.chars().fold((0usize, 0usize), |(markers, visible), c| {
            if is_marker(c) {
                (markers + 1, visible)
            } else {
                (markers, visible + 1)
            }
        });

    PayloadReport {
        visible_chars,
        marker_count,
        payload_bytes: marker_count / BITS_PER_BYTE,
        trailing_bits: marker_count % BITS_PER_BYTE,
    }
}
