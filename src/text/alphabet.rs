//! The two-character marker alphabet.
//!
//! Every payload bit is written as one zero-width character:
//! - `0` -> U+200B ZERO WIDTH SPACE
//! - `1` -> U+200C ZERO WIDTH NON-JOINER
//!
//! Both render as nothing in ordinary text. Changing either character
//! changes the wire format, so the alphabet is fixed.

/// Marker for a `0` bit (ZERO WIDTH SPACE).
pub const MARKER_ZERO: char = '\u{200B}';

/// Marker for a `1` bit (ZERO WIDTH NON-JOINER).
pub const MARKER_ONE: char = '\u{200C}';

/// UTF-8 width of either marker character.
pub const MARKER_UTF8_LEN: usize = 3;

/// Returns the marker character for a bit.
#[inline]
pub fn bit_to_marker(bit: bool) -> char {
    if bit {
        MARKER_ONE
    } else {
        MARKER_ZERO
    }
}

/// Returns the bit a character stands for, or `None` if it is not a marker.
#[inline]
pub fn marker_to_bit(c: char) -> Option<bool> {
    match c {
        MARKER_ZERO => Some(false),
        MARKER_ONE => Some(true),
        _ => None,
    }
}

/// True if `c` is one of the two marker characters.
#[inline]
pub fn is_marker(c: char) -> bool {
    marker_to_bit(c).is_some()
}
