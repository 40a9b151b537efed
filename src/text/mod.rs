//! Text processing for zero-width steganography.
//!
//! This module provides:
//! - The fixed two-character marker alphabet
//! - MSB-first conversion between bytes and markers
//! - Marker scanning, stripping and payload inspection

pub mod alphabet;
pub mod bits;
pub mod scan;

pub use alphabet::{bit_to_marker, is_marker, marker_to_bit, MARKER_ONE, MARKER_ZERO};
pub use bits::{markers_for, write_markers, BytePacker, BITS_PER_BYTE};
pub use scan::{
    collect_markers, count_markers, has_hidden_message, inspect, strip_markers, PayloadReport,
};
