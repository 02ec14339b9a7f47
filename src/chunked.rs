use crate::alphabet::{Alphabet, PADDING};

/// Errors that can occur during decoding.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet
    InvalidCharacter(char),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidCharacter(c) => write!(f, "Invalid character in input: {}", c),
        }
    }
}

impl std::error::Error for DecodeError {}

const BITS_PER_SYMBOL: usize = 6;

pub fn encode_chunked(data: &[u8], alphabet: &Alphabet, use_padding: bool) -> String {
    let symbol_count = (data.len() * 8).div_ceil(BITS_PER_SYMBOL);
    let padded_count = if use_padding {
        symbol_count.div_ceil(4) * 4
    } else {
        symbol_count
    };
    // Alphabet symbols occupy up to three bytes in UTF-8.
    let mut result = String::with_capacity(padded_count * 3);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | byte as u32;
        bits_in_buffer += 8;

        while bits_in_buffer >= BITS_PER_SYMBOL {
            bits_in_buffer -= BITS_PER_SYMBOL;
            let index = ((bit_buffer >> bits_in_buffer) & 0x3F) as usize;
            result.push(alphabet.encode_digit(index).unwrap());
        }
    }

    // A final partial group is left-aligned: the missing low bits read as zero.
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (BITS_PER_SYMBOL - bits_in_buffer)) & 0x3F) as usize;
        result.push(alphabet.encode_digit(index).unwrap());
    }

    for _ in symbol_count..padded_count {
        result.push(PADDING);
    }

    result
}

/// Decodes a symbol sequence back into bytes.
///
/// With `use_padding`, every trailing padding marker is stripped first,
/// however many are present; a marker anywhere else fails the alphabet
/// lookup like any other foreign character. A trailing remnant shorter
/// than a byte carries no data and produces no output.
pub fn decode_chunked(
    encoded: &str,
    alphabet: &Alphabet,
    use_padding: bool,
) -> Result<Vec<u8>, DecodeError> {
    let symbols = if use_padding {
        encoded.trim_end_matches(PADDING)
    } else {
        encoded
    };

    let mut result = Vec::with_capacity(symbols.len() * BITS_PER_SYMBOL / 8);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for c in symbols.chars() {
        let digit = alphabet
            .decode_char(c)
            .ok_or(DecodeError::InvalidCharacter(c))?;

        bit_buffer = (bit_buffer << BITS_PER_SYMBOL) | digit as u32;
        bits_in_buffer += BITS_PER_SYMBOL;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    Ok(result)
}
