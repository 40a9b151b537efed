//! MSB-first conversion between bytes and marker characters.
//!
//! [`write_markers`] turns each byte into eight markers, most significant
//! bit first. [`BytePacker`] does the reverse one bit at a time and keeps
//! whatever is left over when the bit count is not a multiple of eight.

use super::alphabet::{bit_to_marker, MARKER_UTF8_LEN};

/// Number of markers per payload byte.
pub const BITS_PER_BYTE: usize = 8;

/// Appends the markers for `bytes` to `out`.
pub fn write_markers(out: &mut String, bytes: &[u8]) {
    out.reserve(bytes.len() * BITS_PER_BYTE * MARKER_UTF8_LEN);
    for &byte in bytes {
        for shift in (0..BITS_PER_BYTE).rev() {
            out.push(bit_to_marker((byte >> shift) & 1 == 1));
        }
    }
}

/// Returns the markers for `bytes` as a new string.
pub fn markers_for(bytes: &[u8]) -> String {
    let mut out = String::new();
    write_markers(&mut out, bytes);
    out
}

/// Packs bits into bytes, most significant bit first.
///
/// Bits that do not complete a byte stay pending and are reported by
/// [`BytePacker::pending_bits`]; they are never zero-padded into a byte.
#[derive(Debug, Default, Clone)]
pub struct BytePacker {
    bytes: Vec<u8>,
    current: u8,
    filled: u8,
    total_bits: usize,
}

impl BytePacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one bit.
    pub fn push(&mut self, bit: bool) {
        self.current = (self.current << 1) | u8::from(bit);
        self.filled += 1;
        self.total_bits += 1;
        if self.filled as usize == BITS_PER_BYTE {
            self.bytes.push(self.current);
            self.current = 0;
            self.filled = 0;
        }
    }

    /// Total bits fed so far, including pending ones.
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Bits waiting for a byte that was never completed.
    pub fn pending_bits(&self) -> usize {
        self.filled as usize
    }

    /// Returns the complete bytes, dropping the pending tail.
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

impl Extend<bool> for BytePacker {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}
