//! Alphabet validation, run before any checksum or pattern lookup.

use crate::error::BarcodeError;

/// Reject `code` if any character fails the `allowed` membership test.
///
/// All offending characters are collected (in order, duplicates kept)
/// before failing, so the error names every problem at once.
///
/// ## Example
///
/// ```
/// use barstream::symbology::validate::check_code;
///
/// let digits = |c: char| c.is_ascii_digit();
/// assert!(check_code("0123", "digits", digits).is_ok());
/// assert!(check_code("01x3", "digits", digits).is_err());
/// ```
pub fn check_code(
    code: &str,
    symbology: &'static str,
    allowed: impl Fn(char) -> bool,
) -> Result<(), BarcodeError> {
    let wrong: Vec<char> = code.chars().filter(|&c| !allowed(c)).collect();
    if wrong.is_empty() {
        return Ok(());
    }
    tracing::debug!(symbology, offenders = wrong.len(), "rejecting code");
    Err(BarcodeError::IllegalCharacter {
        symbology,
        characters: wrong,
    })
}
