//! Built-in alphabets and character class flags.

use bitflags::bitflags;

/// Characters that are easy to confuse with one another.
pub const SIMILAR_ALPHABET: &str = "O01lI";
pub const LOWER_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS_ALPHABET: &str = "0123456789";
pub const SPECIAL_ALPHABET: &str = "#&@{}^~[]|$*><;,._-?:)(!%=";

bitflags! {
    /// Set of character classes. Iteration yields classes in declaration order,
    /// which is the order mask segments are expanded in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClasses: u8 {
        const LOWER = 1;
        const UPPER = 1 << 1;
        const DIGIT = 1 << 2;
        const SPECIAL = 1 << 3;
    }
}

impl CharClasses {
    /// Maps a mask marker (`a`, `A`, `1`, `@`) to its class.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'a' => Some(Self::LOWER),
            'A' => Some(Self::UPPER),
            '1' => Some(Self::DIGIT),
            '@' => Some(Self::SPECIAL),
            _ => None,
        }
    }

    /// Collects every class marker found in `markers`; unknown characters are ignored.
    pub fn from_markers(markers: &str) -> Self {
        markers
            .chars()
            .filter_map(Self::from_marker)
            .fold(Self::empty(), |acc, class| acc | class)
    }
}

/// Returns `true` if `alphabet` contains `c`.
#[inline]
pub fn contains(alphabet: &str, c: char) -> bool {
    alphabet.contains(c)
}
