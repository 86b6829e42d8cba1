//! # Render Metadata
//!
//! The encoders stop at bar/space patterns. This module carries the
//! physical settings an external renderer applies to them.
//!
//! - [`options`]: module width, height and quiet zone
//! - [`layout`]: pattern stream plus resolved options

pub mod layout;
pub mod options;

pub use layout::{Layout, modules, to_ascii};
pub use options::{OptionOverrides, WriterOptions};
