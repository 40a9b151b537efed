//! Integration tests for invisink
//!
//! Covers the public codec API:
//! - Round-trip of text and byte payloads
//! - Length and determinism guarantees
//! - No-message and trailing-bit behavior
//! - UTF-8 policies and cover policies

use invisink::text::{MARKER_ONE, MARKER_ZERO};
use invisink::{
    count_markers, decode, decode_bytes, decode_with_config, encode, encode_bytes,
    encode_with_config, has_hidden_message, inspect, strip_markers, CoverPolicy, DecoderConfig,
    DecoderError, EncoderConfig, EncoderError, Utf8Policy,
};
use proptest::prelude::*;

fn bits_of(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            MARKER_ZERO => Some('0'),
            MARKER_ONE => Some('1'),
            _ => None,
        })
        .collect()
}

/// Test the documented "Hi" example end to end
#[test]
fn test_meeting_at_noon_example() {
    let combined = encode("Meeting at noon", "Hi").unwrap();

    assert!(combined.starts_with("Meeting at noon"));
    assert_eq!(
        combined.chars().count() - "Meeting at noon".chars().count(),
        16
    );
    assert_eq!(bits_of(&combined), "0100100001101001");
    assert_eq!(decode(&combined).unwrap(), "Hi");
}

/// Test multi-byte characters survive the round trip
#[test]
fn test_euro_sign_roundtrip() {
    let combined = encode("x", "€").unwrap();
    assert_eq!(count_markers(&combined), 24);
    assert_eq!(decode(&combined).unwrap(), "€");
}

/// Test a mix of scripts, emoji and whitespace
#[test]
fn test_mixed_unicode_roundtrip() {
    let secret = "Grüße, 世界! 🚀\n\ttabs and newlines";
    let combined = encode("An innocent sentence.", secret).unwrap();
    assert_eq!(decode(&combined).unwrap(), secret);
}

/// Test that an empty secret leaves the cover untouched
#[test]
fn test_empty_secret_is_identity() {
    assert_eq!(encode("cover text", "").unwrap(), "cover text");
}

/// Test that encoding an empty secret then decoding reports no message
#[test]
fn test_empty_secret_cannot_be_decoded() {
    let combined = encode("cover text", "").unwrap();
    assert!(matches!(
        decode(&combined),
        Err(DecoderError::NoHiddenMessage)
    ));
}

/// Test no-message errors on empty and plain input
#[test]
fn test_no_hidden_message() {
    assert!(matches!(decode(""), Err(DecoderError::NoHiddenMessage)));
    assert!(matches!(
        decode("hello world"),
        Err(DecoderError::NoHiddenMessage)
    ));
    // Other invisible characters are not markers
    assert!(matches!(
        decode("a\u{200D}b\u{FEFF}c"),
        Err(DecoderError::NoHiddenMessage)
    ));
}

/// Test that 11 markers recover exactly one byte
#[test]
fn test_trailing_partial_byte_is_dropped() {
    let mut crafted = String::from("cover");
    for bit in "01000010101".chars() {
        crafted.push(if bit == '1' { MARKER_ONE } else { MARKER_ZERO });
    }

    let decoded = decode_with_config(&crafted, &DecoderConfig::default()).unwrap();
    assert_eq!(decoded.message, "B");
    assert_eq!(decoded.bytes, vec![b'B']);
    assert_eq!(decoded.discarded_bits, 3);
}

/// Test that the visible text plays no part in decoding
#[test]
fn test_decode_independent_of_visible_text() {
    let a = encode("first cover", "same secret").unwrap();
    let b = encode("a completely different cover", "same secret").unwrap();

    assert_eq!(decode(&a).unwrap(), decode(&b).unwrap());

    // Appending more visible text after the payload changes nothing
    let extended = format!("{}\n-- sent from my phone", a);
    assert_eq!(decode(&extended).unwrap(), "same secret");
}

/// Test that stripping recovers the cover exactly
#[test]
fn test_strip_recovers_cover() {
    let combined = encode("Nothing to see here.", "hidden").unwrap();
    assert!(has_hidden_message(&combined));
    assert_eq!(strip_markers(&combined), "Nothing to see here.");
    assert!(!has_hidden_message(&strip_markers(&combined)));
}

/// Test the inspection report on encoded text
#[test]
fn test_inspect_encoded_text() {
    let combined = encode("abc", "four").unwrap();
    let report = inspect(&combined);
    assert_eq!(report.visible_chars, 3);
    assert_eq!(report.marker_count, 32);
    assert_eq!(report.payload_bytes, 4);
    assert_eq!(report.trailing_bits, 0);
}

/// Test that binary payloads round-trip through decode_bytes
#[test]
fn test_binary_payload_roundtrip() {
    let payload: Vec<u8> = (0..=255).collect();
    let combined = encode_bytes("binary inside", &payload);
    assert_eq!(decode_bytes(&combined).unwrap(), payload);
}

/// Test lenient vs strict handling of invalid UTF-8
#[test]
fn test_utf8_policies() {
    // Truncated 3-byte sequence for '€'
    let combined = encode_bytes("cover", &[0xE2, 0x82]);

    let lenient = decode_with_config(&combined, &DecoderConfig::default()).unwrap();
    assert!(lenient.lossy);
    assert!(lenient.message.contains('\u{FFFD}'));

    let strict = DecoderConfig {
        utf8: Utf8Policy::Strict,
    };
    assert!(matches!(
        decode_with_config(&combined, &strict),
        Err(DecoderError::InvalidUtf8(_))
    ));
}

/// Test that a marked cover corrupts the payload unless rejected
#[test]
fn test_marked_cover_policies() {
    let cover = format!("looks{}normal", MARKER_ZERO);

    // Allowed by default, and the extra marker shifts every bit
    let combined = encode(&cover, "Hi").unwrap();
    assert_ne!(decode(&combined).unwrap(), "Hi");

    let reject = EncoderConfig {
        cover_policy: CoverPolicy::Reject,
    };
    let err = encode_with_config(&cover, "Hi", &reject).unwrap_err();
    assert!(matches!(err, EncoderError::MarkedCover(1)));
    assert!(err.to_string().starts_with("Encoding failed"));
}

/// Test that the codec can be shared across threads
#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let secret = format!("message {}", i);
                let combined = encode("shared cover", &secret).unwrap();
                assert_eq!(decode(&combined).unwrap(), secret);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

fn marker_free_cover() -> impl Strategy<Value = String> {
    any::<String>().prop_map(|s| strip_markers(&s))
}

proptest! {
    #[test]
    fn prop_roundtrip(cover in marker_free_cover(), secret in any::<String>()) {
        prop_assume!(!secret.is_empty());
        let combined = encode(&cover, &secret).unwrap();
        prop_assert_eq!(decode(&combined).unwrap(), secret);
    }

    #[test]
    fn prop_length_invariant(cover in any::<String>(), secret in any::<String>()) {
        let combined = encode(&cover, &secret).unwrap();
        prop_assert_eq!(
            combined.chars().count() - cover.chars().count(),
            8 * secret.len()
        );
        prop_assert!(combined.starts_with(&cover));
    }

    #[test]
    fn prop_deterministic(cover in any::<String>(), secret in any::<String>()) {
        prop_assert_eq!(encode(&cover, &secret).unwrap(), encode(&cover, &secret).unwrap());
    }

    #[test]
    fn prop_decode_deterministic(text in any::<String>(), secret in any::<String>()) {
        let combined = encode(&text, &secret).unwrap();
        let first = decode_with_config(&combined, &DecoderConfig::default());
        let second = decode_with_config(&combined, &DecoderConfig::default());
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.message, b.message);
                prop_assert_eq!(a.bytes, b.bytes);
                prop_assert_eq!(a.discarded_bits, b.discarded_bits);
            }
            (Err(DecoderError::NoHiddenMessage), Err(DecoderError::NoHiddenMessage)) => {}
            (a, b) => prop_assert!(false, "decode diverged: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn prop_strip_restores_cover(cover in marker_free_cover(), secret in any::<String>()) {
        let combined = encode(&cover, &secret).unwrap();
        prop_assert_eq!(strip_markers(&combined), cover);
    }
}
