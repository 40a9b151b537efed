//! # invisink - hide text inside text
//!
//! invisink hides a message inside an ordinary "cover" text by appending
//! the message as a run of zero-width Unicode characters. The combined
//! text looks identical to the cover text.
//!
//! ## Overview
//!
//! - The message is taken as UTF-8 bytes
//! - Each byte becomes 8 bits, most significant bit first
//! - Each bit becomes a zero-width character: `0` -> U+200B, `1` -> U+200C
//! - The characters are appended to the cover text with no separator
//!
//! Decoding reads every marker character in the text, wherever it is,
//! and ignores everything else.
//!
//! ## What it is not
//!
//! - **No encryption**: anyone can decode the message
//! - **No robustness**: stripping zero-width characters destroys it
//! - **No framing**: markers already in the cover text are read as payload
//!
//! ## Example Usage
//!
//! ```rust
//! use invisink::{decode, encode};
//!
//! let combined = encode("Meeting at noon", "Hi").unwrap();
//! assert!(combined.starts_with("Meeting at noon"));
//! assert_eq!(combined.chars().count(), "Meeting at noon".len() + 16);
//!
//! assert_eq!(decode(&combined).unwrap(), "Hi");
//! ```
//!
//! ## Modules
//!
//! - [`text`]: Marker alphabet, bit packing and marker scanning
//! - [`encoder`]: Message encoding
//! - [`decoder`]: Message decoding
//! - [`config`]: Settings file for the CLI

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod text;

// Re-export commonly used types at the crate root
pub use decoder::{
    decode, decode_bytes, decode_with_config, DecodedMessage, DecoderConfig, DecoderError,
    Utf8Policy,
};
pub use encoder::{
    encode, encode_bytes, encode_bytes_with_config, encode_reader, encode_with_config,
    CoverPolicy, EncodedMessage, EncoderConfig, EncoderError,
};
pub use text::{count_markers, has_hidden_message, inspect, strip_markers, PayloadReport};
