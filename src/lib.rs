//! Base64-style encoding and decoding over a fixed 64-character Chinese alphabet.

mod alphabet;
mod chunked;

pub use alphabet::{Alphabet, HACHI_ALPHABET, PADDING};
pub use chunked::DecodeError;

/// Encodes a byte slice into a Hachi64 string.
pub fn encode(data: &[u8], use_padding: bool) -> String {
    chunked::encode_chunked(data, Alphabet::hachi(), use_padding)
}

/// Decodes a Hachi64 string back into bytes.
///
/// # Errors
///
/// Fails with [`DecodeError::InvalidCharacter`] if the input contains a
/// character outside the alphabet.
pub fn decode(encoded: &str, use_padding: bool) -> Result<Vec<u8>, DecodeError> {
    chunked::decode_chunked(encoded, Alphabet::hachi(), use_padding)
}
