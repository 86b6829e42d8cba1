//! # Checksum Algorithms
//!
//! | Algorithm | Used by | Input |
//! |-----------|---------|-------|
//! | Modulo 43 | Code 39 | symbol ordinals |
//! | Weighted modulo 11 | PZN | six decimal digits |
//! | Weighted modulo 103 | Code 128 | emitted symbol ordinals |
//!
//! All three are pure functions over their input.

use crate::error::BarcodeError;

/// Code 39 modulus (also the size of its alphabet)
pub const MODULO_43: usize = 43;

/// PZN modulus
pub const MODULO_11: u32 = 11;

/// Weight applied to the first PZN digit; each following digit adds one.
pub const PZN_FIRST_WEIGHT: u32 = 2;

/// Code 128 modulus
pub const MODULO_103: u32 = 103;

/// Sum of ordinals modulo 43.
///
/// The result is always a valid Code 39 ordinal.
pub fn modulo43(ordinals: impl IntoIterator<Item = usize>) -> usize {
    ordinals.into_iter().sum::<usize>() % MODULO_43
}

/// Weighted modulo-11 check digit for a PZN.
///
/// Digit `i` (0-based) is weighted by `i + 2`. A remainder of 10 has no
/// single-digit representation and is reported as an error.
///
/// ## Example
///
/// ```
/// use barstream::symbology::checksum::weighted_modulo11;
///
/// // 2*1 = 2
/// assert_eq!(weighted_modulo11(&[1, 0, 0, 0, 0, 0], "PZN").unwrap(), 2);
/// ```
pub fn weighted_modulo11(digits: &[u32], symbology: &'static str) -> Result<u32, BarcodeError> {
    let sum: u32 = digits
        .iter()
        .zip(PZN_FIRST_WEIGHT..)
        .map(|(digit, weight)| digit * weight)
        .sum();
    let checksum = sum % MODULO_11;
    if checksum == 10 {
        return Err(BarcodeError::Checksum {
            symbology,
            reason: format!("weighted sum {} gives check value 10", sum),
        });
    }
    Ok(checksum)
}

/// Code 128 check symbol.
///
/// The start symbol counts with weight 1, as does the first symbol after
/// it; every later symbol is weighted by its position in the stream.
pub fn modulo103(symbols: &[u8]) -> u8 {
    let Some((&start, rest)) = symbols.split_first() else {
        return 0;
    };
    let sum = rest
        .iter()
        .zip(1u32..)
        .fold(u32::from(start), |acc, (&symbol, position)| {
            acc + position * u32::from(symbol)
        });
    (sum % MODULO_103) as u8
}
