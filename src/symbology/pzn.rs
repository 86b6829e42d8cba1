//! # PZN (Pharmazentralnummer)
//!
//! German pharmaceutical product number, printed as Code 39.
//!
//! Six digits are extended with a weighted modulo-11 check digit and
//! prefixed with `PZN-`. The result is handed to the Code 39 builder
//! without a second (modulo-43) check character.
//!
//! ```
//! use barstream::symbology::{Barcode, pzn::Pzn};
//!
//! let pzn = Pzn::new("100000").unwrap();
//! assert_eq!(pzn.full_code(), "PZN-1000002");
//! ```

use std::fmt;

use super::Barcode;
use super::checksum;
use super::code39::Code39;
use super::validate::check_code;
use crate::error::BarcodeError;
use crate::render::WriterOptions;

/// Number of payload digits (check digit excluded)
pub const DIGITS: usize = 6;

/// Literal marker in front of the number
pub const PREFIX: &str = "PZN-";

/// A PZN with its check digit, encoded through Code 39.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pzn {
    /// Six payload digits followed by the check digit
    pzn: String,
    inner: Code39,
}

impl Pzn {
    pub const NAME: &'static str = "Pharmazentralnummer";

    /// Build a PZN from its first six digits.
    ///
    /// Anything past the sixth character is ignored, so a seven-digit PZN
    /// with an existing check digit is accepted and re-checked.
    pub fn new(pzn: &str) -> Result<Self, BarcodeError> {
        let pzn: String = pzn.chars().take(DIGITS).collect();
        check_code(&pzn, Self::NAME, |c| c.is_ascii_digit())?;

        let digits: Vec<u32> = pzn.chars().filter_map(|c| c.to_digit(10)).collect();
        if digits.len() != DIGITS {
            return Err(BarcodeError::NumberOfDigits {
                symbology: Self::NAME,
                expected: DIGITS,
                found: digits.len(),
            });
        }

        let check = checksum::weighted_modulo11(&digits, Self::NAME)?;
        let pzn = format!("{}{}", pzn, check);
        let inner = Code39::without_checksum(&format!("{}{}", PREFIX, pzn))?;
        Ok(Self { pzn, inner })
    }

    /// Payload digits plus check digit, without the prefix.
    pub fn number(&self) -> &str {
        &self.pzn
    }

    /// The check digit.
    pub fn check_digit(&self) -> char {
        self.pzn.chars().last().unwrap_or('0')
    }

    /// The underlying Code 39 symbol.
    pub fn code39(&self) -> &Code39 {
        &self.inner
    }
}

impl fmt::Display for Pzn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.pzn)
    }
}

impl Barcode for Pzn {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn full_code(&self) -> String {
        self.to_string()
    }

    fn build(&self) -> Vec<String> {
        self.inner.build()
    }

    fn default_options(&self) -> WriterOptions {
        self.inner.default_options()
    }
}
