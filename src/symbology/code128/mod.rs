//! # Code 128
//!
//! Full-ASCII linear symbology with three interleaved charsets (see
//! [`charset`]). The encoder walks the input left to right, asking
//! [`switch::transition`] at every position whether to change charset,
//! and packs runs of four or more digits two per symbol in charset C.
//!
//! ## Symbol Stream
//!
//! ```text
//! START  [switch] data [switch] data ...  CHECK  STOP
//! ```
//!
//! The walk always begins in charset B. When the very first character
//! already needs another charset, that charset's start symbol is used
//! instead of `START B` followed by a switch.
//!
//! ## Example
//!
//! ```
//! use barstream::symbology::code128::{Code128, charset};
//!
//! let barcode = Code128::new("123456").unwrap();
//! // START C, 12, 34, 56
//! assert_eq!(barcode.symbols(), &[charset::START_C, 12, 34, 56]);
//! ```

pub mod charset;
pub mod switch;

use std::fmt;

use self::charset::Charset;
use super::Barcode;
use super::checksum;
use super::validate::check_code;
use crate::error::BarcodeError;
use crate::render::WriterOptions;

/// Minimum module width in millimetres
pub const MIN_MODULE_WIDTH: f32 = 0.2;

/// Minimum quiet zone in millimetres
pub const MIN_QUIET_ZONE: f32 = 2.54;

/// A validated and encoded Code 128 symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128 {
    code: String,
    /// Start symbol plus data and switch symbols; no check or stop
    symbols: Vec<u8>,
}

impl Code128 {
    pub const NAME: &'static str = "Code 128";

    /// Validate `code` and encode it into a symbol stream.
    pub fn new(code: &str) -> Result<Self, BarcodeError> {
        check_code(code, Self::NAME, charset::is_allowed)?;
        tracing::debug!(symbology = Self::NAME, len = code.len(), "encoding");
        let chars: Vec<char> = code.chars().collect();
        let symbols = encode(&chars)?;
        Ok(Self {
            code: code.to_string(),
            symbols,
        })
    }

    /// The input code, unchanged.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Start, data and switch symbols in emission order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// The modulo-103 check symbol.
    pub fn checksum(&self) -> u8 {
        checksum::modulo103(&self.symbols)
    }

    /// Charset the symbol opens with.
    pub fn start_charset(&self) -> Charset {
        match self.symbols.first() {
            Some(&charset::START_A) => Charset::A,
            Some(&charset::START_C) => Charset::C,
            _ => Charset::B,
        }
    }
}

impl fmt::Display for Code128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl Barcode for Code128 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn full_code(&self) -> String {
        self.code.clone()
    }

    /// One pattern per symbol: start, data, check, then the stop pattern.
    fn build(&self) -> Vec<String> {
        self.symbols
            .iter()
            .chain(std::iter::once(&self.checksum()))
            .map(|&s| charset::PATTERNS[usize::from(s)].to_string())
            .chain(std::iter::once(charset::STOP.to_string()))
            .collect()
    }

    fn default_options(&self) -> WriterOptions {
        WriterOptions {
            module_width: MIN_MODULE_WIDTH,
            quiet_zone: MIN_QUIET_ZONE,
            ..WriterOptions::BASE
        }
    }
}

fn illegal(c: char) -> BarcodeError {
    BarcodeError::IllegalCharacter {
        symbology: Code128::NAME,
        characters: vec![c],
    }
}

/// Walk `chars` and produce the symbol stream (without check and stop).
fn encode(chars: &[char]) -> Result<Vec<u8>, BarcodeError> {
    let mut state = Charset::B;
    let mut symbols = vec![state.start()];
    // First half of a digit pair in charset C
    let mut pending: Option<char> = None;

    for (pos, &c) in chars.iter().enumerate() {
        let run = switch::digit_run(&chars[pos..]);
        let step = switch::transition(state, c, run);

        if let Some(code) = step.switch {
            tracing::trace!(pos, from = ?state, to = ?step.state, "charset switch");
            if pos == 0 {
                symbols[0] = step.state.start();
            } else {
                symbols.push(code);
            }
            if let Some(digit) = pending.take() {
                tracing::trace!(pos, digit = %digit, "flushing odd digit");
                symbols.push(step.state.value(digit).ok_or_else(|| illegal(digit))?);
            }
        }
        state = step.state;

        match state {
            Charset::C => match pending.take() {
                Some(first) => {
                    symbols.push(charset::pair_value(first, c).ok_or_else(|| illegal(c))?);
                }
                None => pending = Some(c),
            },
            Charset::A | Charset::B => {
                symbols.push(state.value(c).ok_or_else(|| illegal(c))?);
            }
        }
    }

    if let Some(digit) = pending {
        tracing::trace!(digit = %digit, "flushing trailing odd digit");
        symbols.push(charset::CODE_B);
        symbols.push(Charset::B.value(digit).ok_or_else(|| illegal(digit))?);
    }

    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::charset::{CODE_A, CODE_B, CODE_C, START_A, START_B, START_C, STOP};
    use super::*;
    use pretty_assertions::assert_eq;

    fn symbols(code: &str) -> Vec<u8> {
        Code128::new(code).unwrap().symbols().to_vec()
    }

    #[test]
    fn test_plain_text_stays_in_b() {
        // H=40 e=69 l=76 l=76 o=79
        assert_eq!(symbols("Hello"), vec![START_B, 40, 69, 76, 76, 79]);
    }

    #[test]
    fn test_empty_code() {
        let barcode = Code128::new("").unwrap();
        assert_eq!(barcode.symbols(), &[START_B]);
        assert_eq!(barcode.checksum(), 1);
        assert_eq!(barcode.build().len(), 3);
    }

    #[test]
    fn test_three_digits_stay_in_b() {
        assert_eq!(symbols("A123"), vec![START_B, 33, 17, 18, 19]);
    }

    #[test]
    fn test_four_digits_switch_at_run_start() {
        assert_eq!(symbols("A1234"), vec![START_B, 33, CODE_C, 12, 34]);
    }

    #[test]
    fn test_even_digits_use_start_c() {
        assert_eq!(symbols("12345678"), vec![START_C, 12, 34, 56, 78]);
    }

    #[test]
    fn test_odd_digits_flush_in_b() {
        // '5' in B is 21
        assert_eq!(symbols("12345"), vec![START_C, 12, 34, CODE_B, 21]);
    }

    #[test]
    fn test_odd_run_flushed_before_next_character() {
        // 'a' in B is 65
        assert_eq!(
            symbols("12345a"),
            vec![START_C, 12, 34, CODE_B, 21, 65]
        );
    }

    #[test]
    fn test_control_character_leaving_c_goes_to_a() {
        // '\t' in A is 73
        assert_eq!(symbols("1234\t"), vec![START_C, 12, 34, CODE_A, 73]);
    }

    #[test]
    fn test_leading_control_starts_in_a() {
        // '\r' in A is 77, 'A' in A is 33
        assert_eq!(symbols("\rA"), vec![START_A, 77, 33]);
    }

    #[test]
    fn test_a_to_b_and_back() {
        // '\n'=74 (A), 'a'=65 (B), '\n'=74 (A)
        assert_eq!(
            symbols("\na\n"),
            vec![START_A, 74, CODE_B, 65, CODE_A, 74]
        );
    }

    #[test]
    fn test_mixed_runs() {
        assert_eq!(
            symbols("AB1234C56789"),
            vec![START_B, 33, 34, CODE_C, 12, 34, CODE_B, 35, CODE_C, 56, 78, CODE_B, 25]
        );
    }

    #[test]
    fn test_checksum_reference() {
        // 104 + 1*48 ('P') + 2*42 ('J') + 3*42 ('J') + 4*17 + 5*18 + 6*19 + 7*35 ('C') = 879
        let barcode = Code128::new("PJJ123C").unwrap();
        assert_eq!(barcode.checksum(), (879 % 103) as u8);
    }

    #[test]
    fn test_build_layout() {
        let barcode = Code128::new("12").unwrap();
        // START B, '1', '2'; check = 104 + 17 + 2*18 = 157 % 103 = 54
        assert_eq!(barcode.symbols(), &[START_B, 17, 18]);
        assert_eq!(
            barcode.build(),
            vec![
                charset::PATTERNS[104].to_string(),
                charset::PATTERNS[17].to_string(),
                charset::PATTERNS[18].to_string(),
                charset::PATTERNS[54].to_string(),
                STOP.to_string(),
            ]
        );
    }

    #[test]
    fn test_start_charset() {
        assert_eq!(Code128::new("abc").unwrap().start_charset(), Charset::B);
        assert_eq!(Code128::new("0000").unwrap().start_charset(), Charset::C);
        assert_eq!(Code128::new("\x02").unwrap().start_charset(), Charset::A);
    }

    #[test]
    fn test_non_ascii_rejected() {
        match Code128::new("caf\u{e9} \u{fc}").unwrap_err() {
            BarcodeError::IllegalCharacter {
                symbology,
                characters,
            } => {
                assert_eq!(symbology, "Code 128");
                assert_eq!(characters, vec!['\u{e9}', '\u{fc}']);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
