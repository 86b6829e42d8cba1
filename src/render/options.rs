//! # Writer Options
//!
//! Physical metadata a renderer needs to draw a pattern stream. All
//! lengths are in millimetres.
//!
//! Options are layered: [`WriterOptions::BASE`], then the symbology's own
//! minimums (see [`crate::symbology::Barcode::default_options`]), then the
//! caller's [`OptionOverrides`].
//!
//! ```
//! use barstream::render::{OptionOverrides, WriterOptions};
//!
//! let overrides = OptionOverrides::from_json(r#"{"quiet_zone": 10.0}"#).unwrap();
//! let options = WriterOptions::BASE.merged(&overrides);
//! assert_eq!(options.quiet_zone, 10.0);
//! assert_eq!(options.module_width, 0.2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::BarcodeError;

/// Resolved writer options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Width of one module
    pub module_width: f32,

    /// Bar height
    pub module_height: f32,

    /// Blank margin before and after the symbol
    pub quiet_zone: f32,

    /// Print the full code below the bars
    pub write_text: bool,
}

impl WriterOptions {
    /// Defaults shared by every symbology.
    pub const BASE: Self = Self {
        module_width: 0.2,
        module_height: 15.0,
        quiet_zone: 6.5,
        write_text: true,
    };

    /// Apply the fields set in `overrides`.
    pub fn merged(self, overrides: &OptionOverrides) -> Self {
        Self {
            module_width: overrides.module_width.unwrap_or(self.module_width),
            module_height: overrides.module_height.unwrap_or(self.module_height),
            quiet_zone: overrides.quiet_zone.unwrap_or(self.quiet_zone),
            write_text: overrides.write_text.unwrap_or(self.write_text),
        }
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self::BASE
    }
}

/// Caller-supplied options; unset fields keep their default.
///
/// Unknown keys are ignored so renderer-specific settings can travel in
/// the same JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet_zone: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_text: Option<bool>,
}

impl OptionOverrides {
    /// Parse overrides from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, BarcodeError> {
        Ok(serde_json::from_str(json)?)
    }
}
