//! Pattern stream plus writer metadata, ready for a renderer.

use super::options::WriterOptions;

/// What a renderer receives for one barcode.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Bar/space patterns in drawing order
    pub patterns: Vec<String>,

    /// Resolved writer options
    pub options: WriterOptions,

    /// Caption under the bars, when `write_text` is set
    pub text: Option<String>,
}

impl Layout {
    /// Expand the patterns into modules: true = bar, false = space.
    pub fn modules(&self) -> Vec<bool> {
        modules(&self.patterns)
    }

    /// Number of modules between the quiet zones.
    pub fn module_count(&self) -> usize {
        self.patterns.iter().map(String::len).sum()
    }

    /// Total width including both quiet zones.
    pub fn width_mm(&self) -> f32 {
        self.module_count() as f32 * self.options.module_width + 2.0 * self.options.quiet_zone
    }

    /// Bar height.
    pub fn height_mm(&self) -> f32 {
        self.options.module_height
    }
}

/// Expand patterns into modules: true = bar, false = space.
pub fn modules(patterns: &[String]) -> Vec<bool> {
    patterns
        .iter()
        .flat_map(|p| p.chars())
        .map(|c| c == '1')
        .collect()
}

/// Single-line text preview: `X` for bars, space for spaces.
pub fn to_ascii(patterns: &[String]) -> String {
    patterns
        .iter()
        .flat_map(|p| p.chars())
        .map(|c| if c == '1' { 'X' } else { ' ' })
        .collect()
}
