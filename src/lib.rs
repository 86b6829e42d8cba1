//! # Barstream - Linear Barcode Encoding
//!
//! Barstream turns text into the bar/space module patterns of linear
//! barcodes. It provides:
//!
//! - **Code 39**: alphanumeric, optional modulo-43 check character
//! - **PZN**: German pharmaceutical numbers, printed as Code 39
//! - **Code 128**: full ASCII with automatic A/B/C charset switching
//! - **Render metadata**: module width, height and quiet zone for renderers
//!
//! Drawing the bars (SVG, PNG, printer raster) is up to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use barstream::{
//!     render::OptionOverrides,
//!     symbology::{Barcode, Code128},
//! };
//!
//! let barcode = Code128::new("Order 12345678")?;
//!
//! // One pattern per symbol: start, data, check, stop
//! let patterns = barcode.build();
//! assert!(patterns.iter().all(|p| p.chars().all(|c| c == '0' || c == '1')));
//!
//! // Attach physical metadata for a renderer
//! let layout = barcode.render(&OptionOverrides::default());
//! assert_eq!(layout.text.as_deref(), Some("Order 12345678"));
//!
//! # Ok::<(), barstream::error::BarcodeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`symbology`] | Encoders, checksums and the [`Barcode`] trait |
//! | [`render`] | Writer options and pattern layout |
//! | [`error`] | Error types |
//!
//! ## Logging
//!
//! Encoders emit `tracing` events (`debug` per encode, `trace` per Code 128
//! charset switch). No subscriber is installed by the library.

pub mod error;
pub mod render;
pub mod symbology;

// Re-exports for convenience
pub use error::BarcodeError;
pub use symbology::{Barcode, Code39, Code128, Pzn, Symbology};
