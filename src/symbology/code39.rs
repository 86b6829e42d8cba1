//! # Code 39
//!
//! Alphanumeric linear symbology: digits, uppercase letters and the
//! punctuation set `- . space $ / + %`.
//!
//! ## Pattern Layout
//!
//! ```text
//! EDGE 0 pattern(c1) 0 pattern(c2) 0 ... 0 pattern(cN) 0 EDGE
//! ```
//!
//! Every symbol, including the `EDGE` guard (the `*` start/stop character),
//! is 15 modules wide. `1` is a bar module, `0` a space module.
//!
//! ## Example
//!
//! ```
//! use barstream::symbology::code39::Code39;
//!
//! let barcode = Code39::new("hello-123").unwrap();
//! // Upper-cased, with the modulo-43 check character appended
//! assert_eq!(barcode.code(), "HELLO-123A");
//! ```

use std::fmt;

use super::Barcode;
use super::checksum;
use super::validate::check_code;
use crate::error::BarcodeError;
use crate::render::WriterOptions;

/// Characters in ordinal order. Index = ordinal used by the checksum.
pub const ALPHABET: [char; 43] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', //
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', //
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', //
    '-', '.', ' ', '$', '/', '+', '%',
];

/// Bar/space pattern per ordinal
#[rustfmt::skip]
const PATTERNS: [&str; 43] = [
    "101000111011101", "111010001010111", "101110001010111",
    "111011100010101", "101000111010111", "111010001110101",
    "101110001110101", "101000101110111", "111010001011101",
    "101110001011101", "111010100010111", "101110100010111",
    "111011101000101", "101011100010111", "111010111000101",
    "101110111000101", "101010001110111", "111010100011101",
    "101110100011101", "101011100011101", "111010101000111",
    "101110101000111", "111011101010001", "101011101000111",
    "111010111010001", "101110111010001", "101010111000111",
    "111010101110001", "101110101110001", "101011101110001",
    "111000101010111", "100011101010111", "111000111010101",
    "100010111010111", "111000101110101", "100011101110101",
    "100010101110111", "111000101011101", "100011101011101",
    "100010001000101", "100010001010001", "100010100010001",
    "101000100010001",
];

/// Start/stop guard
pub const EDGE: &str = "100010111011101";

/// Inter-character gap
pub const GAP: &str = "0";

/// Modules per symbol
pub const SYMBOL_WIDTH: usize = 15;

/// Minimum module width in millimetres
pub const MIN_MODULE_WIDTH: f32 = 0.2;

/// Minimum quiet zone in millimetres
pub const MIN_QUIET_ZONE: f32 = 2.54;

/// Ordinal of `c`, if it belongs to the alphabet.
pub fn ordinal(c: char) -> Option<usize> {
    ALPHABET.iter().position(|&a| a == c)
}

/// Pattern of `c`, if it belongs to the alphabet.
pub fn pattern(c: char) -> Option<&'static str> {
    ordinal(c).map(|o| PATTERNS[o])
}

/// Is `c` encodable in Code 39?
pub fn is_allowed(c: char) -> bool {
    ordinal(c).is_some()
}

/// Modulo-43 check character for an already validated code.
///
/// Characters outside the alphabet contribute nothing.
pub fn calculate_checksum(code: &str) -> char {
    let remainder = checksum::modulo43(code.chars().filter_map(ordinal));
    ALPHABET[remainder]
}

/// Concatenate the patterns for `ordinals` between two guards.
fn build_pattern(ordinals: &[usize]) -> String {
    let mut chars = Vec::with_capacity(ordinals.len() + 2);
    chars.push(EDGE);
    chars.extend(ordinals.iter().map(|&o| PATTERNS[o]));
    chars.push(EDGE);
    chars.join(GAP)
}

/// Reverse table lookup of a built pattern.
///
/// Returns `None` if the guards, gaps, or any symbol pattern don't match.
///
/// ```
/// use barstream::symbology::code39::{Code39, decode_pattern};
///
/// let barcode = Code39::without_checksum("AB-12").unwrap();
/// assert_eq!(decode_pattern(&barcode.pattern()).as_deref(), Some("AB-12"));
/// ```
pub fn decode_pattern(pattern: &str) -> Option<String> {
    let body = pattern
        .strip_prefix(EDGE)?
        .strip_suffix(EDGE)?
        .strip_prefix(GAP)?;

    let stride = SYMBOL_WIDTH + GAP.len();
    if body.len() % stride != 0 {
        return None;
    }

    body.as_bytes()
        .chunks(stride)
        .map(|chunk| {
            let (symbol, gap) = chunk.split_at(SYMBOL_WIDTH);
            if gap != GAP.as_bytes() {
                return None;
            }
            PATTERNS
                .iter()
                .position(|p| p.as_bytes() == symbol)
                .map(|o| ALPHABET[o])
        })
        .collect()
}

/// A validated Code 39 code, check character included when requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code39 {
    code: String,
    ordinals: Vec<usize>,
}

impl Code39 {
    pub const NAME: &'static str = "Code 39";

    /// Code 39 with the modulo-43 check character appended.
    pub fn new(code: &str) -> Result<Self, BarcodeError> {
        Self::with_checksum(code, true)
    }

    /// Code 39 without a check character.
    pub fn without_checksum(code: &str) -> Result<Self, BarcodeError> {
        Self::with_checksum(code, false)
    }

    /// Upper-case, validate, and optionally append the check character.
    pub fn with_checksum(code: &str, add_checksum: bool) -> Result<Self, BarcodeError> {
        let mut code = code.to_uppercase();
        check_code(&code, Self::NAME, is_allowed)?;
        if add_checksum {
            let check = calculate_checksum(&code);
            code.push(check);
        }
        tracing::debug!(symbology = Self::NAME, len = code.len(), "encoding");

        let ordinals = code.chars().filter_map(ordinal).collect();
        Ok(Self { code, ordinals })
    }

    /// The encoded code, including any check character.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The full guarded pattern string.
    pub fn pattern(&self) -> String {
        build_pattern(&self.ordinals)
    }
}

impl fmt::Display for Code39 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl Barcode for Code39 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn full_code(&self) -> String {
        self.code.clone()
    }

    fn build(&self) -> Vec<String> {
        vec![self.pattern()]
    }

    fn default_options(&self) -> WriterOptions {
        WriterOptions {
            module_width: MIN_MODULE_WIDTH,
            quiet_zone: MIN_QUIET_ZONE,
            ..WriterOptions::BASE
        }
    }
}
