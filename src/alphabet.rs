use std::collections::HashMap;
use std::sync::OnceLock;

/// The Hachi64 alphabet: 64 Chinese characters, one per 6-bit value.
pub const HACHI_ALPHABET: &str =
    "哈蛤呵吉急集米咪迷南男难北背杯绿律虑豆斗抖啊阿额西希息嘎咖伽花华哗压鸭呀库酷苦奶乃耐龙隆拢曼慢漫波播玻叮丁订咚东冬囊路陆多都弥济";

/// Filler character appended to align padded output to 4-symbol boundaries.
/// Never a member of the alphabet.
pub const PADDING: char = '=';

/// A validated encoding alphabet with its reverse lookup index.
///
/// Holds the ordered symbol table and a character-to-ordinal map derived
/// from it. Immutable after construction and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
    char_to_index: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates a new alphabet from an ordered character set.
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not contain exactly 64 characters,
    /// contains duplicates, or contains the padding marker.
    pub fn new(chars: Vec<char>) -> Result<Self, String> {
        if chars.len() != 64 {
            return Err(format!(
                "Alphabet must contain exactly 64 characters, got {}",
                chars.len()
            ));
        }

        let mut char_to_index = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if c == PADDING {
                return Err(format!(
                    "Alphabet must not contain the padding marker '{}'",
                    PADDING
                ));
            }
            if char_to_index.insert(c, i).is_some() {
                return Err(format!("Duplicate character in alphabet: {}", c));
            }
        }

        Ok(Alphabet {
            chars,
            char_to_index,
        })
    }

    /// Creates an alphabet from a string of characters.
    pub fn from_str(s: &str) -> Result<Self, String> {
        Self::new(s.chars().collect())
    }

    /// Returns the built-in Hachi64 alphabet, built once and shared
    /// read-only for the lifetime of the process.
    pub fn hachi() -> &'static Alphabet {
        static HACHI: OnceLock<Alphabet> = OnceLock::new();
        HACHI.get_or_init(|| {
            Alphabet::from_str(HACHI_ALPHABET).expect("built-in alphabet must be valid")
        })
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// Encodes a digit (0 to base-1) as a character.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Decodes a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }
}
