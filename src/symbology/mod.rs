//! # Symbologies
//!
//! | Symbology | Alphabet | Check |
//! |-----------|----------|-------|
//! | [`code39`] | `0-9 A-Z - . space $ / + %` | optional modulo 43 |
//! | [`pzn`] | six digits, printed as Code 39 | weighted modulo 11 |
//! | [`code128`] | ASCII 0x00-0x7F | always, modulo 103 |
//!
//! Each symbology validates its input up front, computes its check value,
//! and exposes the resulting bar/space patterns through the [`Barcode`]
//! trait. Turning patterns into pixels or vectors is left to the caller
//! (see [`crate::render::Layout`]).
//!
//! ## Example
//!
//! ```
//! use barstream::symbology::{self, Barcode};
//!
//! let barcode = symbology::encode("code39", "ABC").unwrap();
//! assert_eq!(barcode.full_code(), "ABCX");
//! assert_eq!(barcode.build().len(), 1);
//! ```

pub mod checksum;
pub mod code128;
pub mod code39;
pub mod pzn;
pub mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BarcodeError;
use crate::render::{Layout, OptionOverrides, WriterOptions, to_ascii};

pub use code128::Code128;
pub use code39::Code39;
pub use pzn::Pzn;

/// A fully encoded linear barcode.
pub trait Barcode {
    /// Human-readable symbology name
    fn name(&self) -> &'static str;

    /// The code as a scanner reports it, check character included
    fn full_code(&self) -> String;

    /// Ordered bar/space patterns (`1` = bar, `0` = space)
    fn build(&self) -> Vec<String>;

    /// Writer options before caller overrides
    fn default_options(&self) -> WriterOptions {
        WriterOptions::BASE
    }

    /// Single-line text preview: `X` for bars, space for spaces.
    fn to_ascii(&self) -> String {
        to_ascii(&self.build())
    }

    /// Attach writer metadata to the pattern stream.
    ///
    /// Symbology defaults are applied first, then `overrides`.
    fn render(&self, overrides: &OptionOverrides) -> Layout {
        let options = self.default_options().merged(overrides);
        let text = options.write_text.then(|| self.full_code());
        Layout {
            patterns: self.build(),
            options,
            text,
        }
    }
}

/// Registered symbologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    Code39,
    Pzn,
    Code128,
}

impl Symbology {
    pub const ALL: [Symbology; 3] = [Symbology::Code39, Symbology::Pzn, Symbology::Code128];

    /// Registry key
    pub fn key(self) -> &'static str {
        match self {
            Symbology::Code39 => "code39",
            Symbology::Pzn => "pzn",
            Symbology::Code128 => "code128",
        }
    }

    /// Encode `code` with this symbology (Code 39 gets its check character).
    pub fn encode(self, code: &str) -> Result<Box<dyn Barcode>, BarcodeError> {
        Ok(match self {
            Symbology::Code39 => Box::new(Code39::new(code)?),
            Symbology::Pzn => Box::new(Pzn::new(code)?),
            Symbology::Code128 => Box::new(Code128::new(code)?),
        })
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Symbology {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        by_name(s).ok_or_else(|| BarcodeError::UnknownSymbology(s.to_string()))
    }
}

/// Look up a symbology by key, ignoring case.
pub fn by_name(name: &str) -> Option<Symbology> {
    Symbology::ALL
        .into_iter()
        .find(|s| s.key().eq_ignore_ascii_case(name))
}

/// All registry keys.
pub fn list_symbologies() -> Vec<&'static str> {
    Symbology::ALL.iter().map(|s| s.key()).collect()
}

/// Encode `code` with the symbology registered as `name`.
pub fn encode(name: &str, code: &str) -> Result<Box<dyn Barcode>, BarcodeError> {
    name.parse::<Symbology>()?.encode(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_symbologies() {
        assert_eq!(list_symbologies(), vec!["code39", "pzn", "code128"]);
    }

    #[test]
    fn test_by_name_ignores_case() {
        assert_eq!(by_name("CODE128"), Some(Symbology::Code128));
        assert_eq!(by_name("Pzn"), Some(Symbology::Pzn));
        assert_eq!(by_name("ean13"), None);
    }

    #[test]
    fn test_unknown_symbology() {
        let err = encode("qr", "x").err().unwrap();
        assert!(matches!(err, BarcodeError::UnknownSymbology(ref name) if name == "qr"));
    }

    #[test]
    fn test_encode_dispatch() {
        assert_eq!(encode("pzn", "100000").unwrap().name(), "Pharmazentralnummer");
        assert_eq!(encode("code128", "x").unwrap().full_code(), "x");
    }

    #[test]
    fn test_serde_names() {
        let s: Symbology = serde_json::from_str("\"code128\"").unwrap();
        assert_eq!(s, Symbology::Code128);
        assert_eq!(serde_json::to_string(&Symbology::Pzn).unwrap(), "\"pzn\"");
    }

    #[test]
    fn test_render_applies_defaults_and_text() {
        let barcode = Code39::new("A").unwrap();
        let layout = barcode.render(&OptionOverrides::default());
        assert_eq!(layout.options.quiet_zone, code39::MIN_QUIET_ZONE);
        assert_eq!(layout.text.as_deref(), Some("AA"));
        assert_eq!(layout.patterns, barcode.build());
    }

    #[test]
    fn test_render_without_text() {
        let overrides = OptionOverrides {
            write_text: Some(false),
            ..Default::default()
        };
        let layout = Code128::new("x").unwrap().render(&overrides);
        assert_eq!(layout.text, None);
    }
}
