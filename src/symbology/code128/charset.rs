//! Code 128 symbol tables.
//!
//! | Charset | Covers | Ordinals |
//! |---------|--------|----------|
//! | A | space to `_`, then controls `\x00`-`\x1f` | 0-63, 64-95 |
//! | B | space to DEL | 0-95 |
//! | C | digit pairs `00`-`99` | 0-99 |
//!
//! Ordinals 96-106 are shared control symbols (switches, start codes).

/// Switch into charset A (valid from B and C)
pub const CODE_A: u8 = 101;
/// Switch into charset B (valid from A and C)
pub const CODE_B: u8 = 100;
/// Switch into charset C (valid from A and B)
pub const CODE_C: u8 = 99;

pub const START_A: u8 = 103;
pub const START_B: u8 = 104;
pub const START_C: u8 = 105;

/// Modules per symbol
pub const SYMBOL_WIDTH: usize = 11;

/// Stop symbol, termination bar included
pub const STOP: &str = "1100011101011";

/// Bar/space pattern per ordinal (0-105)
#[rustfmt::skip]
pub const PATTERNS: [&str; 106] = [
    "11011001100", "11001101100", "11001100110", "10010011000", "10010001100",
    "10001001100", "10011001000", "10011000100", "10001100100", "11001001000",
    "11001000100", "11000100100", "10110011100", "10011011100", "10011001110",
    "10111001100", "10011101100", "10011100110", "11001110010", "11001011100",
    "11001001110", "11011100100", "11001110100", "11101101110", "11101001100",
    "11100101100", "11100100110", "11101100100", "11100110100", "11100110010",
    "11011011000", "11011000110", "11000110110", "10100011000", "10001011000",
    "10001000110", "10110001000", "10001101000", "10001100010", "11010001000",
    "11000101000", "11000100010", "10110111000", "10110001110", "10001101110",
    "10111011000", "10111000110", "10001110110", "11101110110", "11010001110",
    "11000101110", "11011101000", "11011100010", "11011101110", "11101011000",
    "11101000110", "11100010110", "11101101000", "11101100010", "11100011010",
    "11101111010", "11001000010", "11110001010", "10100110000", "10100001100",
    "10010110000", "10010000110", "10000101100", "10000100110", "10110010000",
    "10110000100", "10011010000", "10011000010", "10000110100", "10000110010",
    "11000010010", "11001010000", "11110111010", "11000010100", "10001111010",
    "10100111100", "10010111100", "10010011110", "10111100100", "10011110100",
    "10011110010", "11110100100", "11110010100", "11110010010", "11011011110",
    "11011110110", "11110110110", "10101111000", "10100011110", "10001011110",
    "10111101000", "10111100010", "11110101000", "11110100010", "10111011110",
    "10111101110", "11101011110", "11110101110", "11010000100", "11010010000",
    "11010011100",
];

/// One of the three interleaved Code 128 symbol sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// Uppercase, digits, punctuation and ASCII controls
    A,
    /// Printable ASCII including lowercase
    B,
    /// Digit pairs
    C,
}

impl Charset {
    /// Start symbol that opens a stream in this charset.
    pub fn start(self) -> u8 {
        match self {
            Charset::A => START_A,
            Charset::B => START_B,
            Charset::C => START_C,
        }
    }

    /// Control symbol that switches into this charset.
    pub fn switch_code(self) -> u8 {
        match self {
            Charset::A => CODE_A,
            Charset::B => CODE_B,
            Charset::C => CODE_C,
        }
    }

    /// Can `c` be encoded on its own in this charset?
    ///
    /// For C this means "is one half of a digit pair".
    pub fn contains(self, c: char) -> bool {
        match self {
            Charset::A => matches!(c, '\x00'..='\x5f'),
            Charset::B => matches!(c, '\x20'..='\x7f'),
            Charset::C => c.is_ascii_digit(),
        }
    }

    /// Ordinal of a single character in A or B.
    ///
    /// Always `None` for C, which only encodes pairs (see [`pair_value`]).
    pub fn value(self, c: char) -> Option<u8> {
        if !self.contains(c) {
            return None;
        }
        let code = c as u8;
        match self {
            Charset::A if code < 0x20 => Some(code + 64),
            Charset::A | Charset::B => Some(code - 0x20),
            Charset::C => None,
        }
    }
}

/// Ordinal of a digit pair in charset C.
pub fn pair_value(first: char, second: char) -> Option<u8> {
    let tens = first.to_digit(10)?;
    let ones = second.to_digit(10)?;
    Some((tens * 10 + ones) as u8)
}

/// Is `c` encodable in any charset?
pub fn is_allowed(c: char) -> bool {
    c.is_ascii()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_are_well_formed() {
        for (ordinal, pattern) in PATTERNS.iter().enumerate() {
            assert_eq!(pattern.len(), SYMBOL_WIDTH, "ordinal {}", ordinal);
            assert!(pattern.starts_with('1') && pattern.ends_with('0'));
            assert!(pattern.chars().all(|c| c == '0' || c == '1'));
        }
        assert_eq!(STOP.len(), 13);
    }

    #[test]
    fn test_values_a() {
        assert_eq!(Charset::A.value(' '), Some(0));
        assert_eq!(Charset::A.value('A'), Some(33));
        assert_eq!(Charset::A.value('_'), Some(63));
        assert_eq!(Charset::A.value('\x00'), Some(64));
        assert_eq!(Charset::A.value('\x1f'), Some(95));
        assert_eq!(Charset::A.value('a'), None);
    }

    #[test]
    fn test_values_b() {
        assert_eq!(Charset::B.value('0'), Some(16));
        assert_eq!(Charset::B.value('a'), Some(65));
        assert_eq!(Charset::B.value('\x7f'), Some(95));
        assert_eq!(Charset::B.value('\n'), None);
    }

    #[test]
    fn test_pairs() {
        assert_eq!(pair_value('0', '0'), Some(0));
        assert_eq!(pair_value('4', '2'), Some(42));
        assert_eq!(pair_value('9', '9'), Some(99));
        assert_eq!(pair_value('9', 'x'), None);
        assert_eq!(Charset::C.value('1'), None);
    }

    #[test]
    fn test_switch_and_start_codes() {
        assert_eq!(Charset::A.switch_code(), 101);
        assert_eq!(Charset::B.switch_code(), 100);
        assert_eq!(Charset::C.switch_code(), 99);
        assert_eq!(Charset::C.start(), 105);
    }

    #[test]
    fn test_alphabet_is_ascii() {
        assert!(is_allowed('\x00'));
        assert!(is_allowed('~'));
        assert!(!is_allowed('\u{e9}'));
    }
}
