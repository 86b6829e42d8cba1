//! # Error Types
//!
//! This module defines error types used throughout the barstream library.

use thiserror::Error;

/// Main error type for barcode encoding
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// Input contains characters outside the symbology's alphabet.
    ///
    /// Offenders are kept in encounter order, duplicates included.
    #[error("The following characters are not valid for {}: {}", .symbology, join_chars(.characters))]
    IllegalCharacter {
        symbology: &'static str,
        characters: Vec<char>,
    },

    /// Numeric input of the wrong length
    #[error("{symbology} must have {expected} digits, not {found}")]
    NumberOfDigits {
        symbology: &'static str,
        expected: usize,
        found: usize,
    },

    /// The checksum has no representable check character
    #[error("Checksum error for {symbology}: {reason}")]
    Checksum {
        symbology: &'static str,
        reason: String,
    },

    /// Registry lookup by an unknown symbology name
    #[error("Unknown symbology: {0}")]
    UnknownSymbology(String),

    /// Malformed writer options
    #[error("Invalid writer options: {0}")]
    Options(#[from] serde_json::Error),
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.escape_debug().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
