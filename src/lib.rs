//! RustQR encoder - QR code generation in pure Rust
//!
//! Turns one or more byte segments into a Model 2 QR symbol (versions 1-40,
//! error correction L/M/Q/H) and renders it as a 1-bit PNG or a pixel raster.
//!
//! ```no_run
//! use rust_qr_encoder::{ECLevel, QrEncoder};
//!
//! let mut encoder = QrEncoder::new();
//! encoder.config_mut().set_ec_level(ECLevel::Q);
//! let symbol = encoder.encode_str("HELLO WORLD")?;
//! encoder.save_png(&symbol, "hello.png")?;
//! # Ok::<(), rust_qr_encoder::QrError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (segments, error correction, placement, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Symbol, ModuleMatrix, Version, etc.)
pub mod models;
/// PNG and raster output
pub mod render;

pub use encoder::{EncoderConfig, QrEncoder};
pub use error::{QrError, Result};
pub use models::{ECLevel, EncodingMode, MaskPattern, Module, ModuleMatrix, Symbol, Version};

/// Encode `data` as a single segment at the given error correction level
///
/// # Example
/// ```
/// use rust_qr_encoder::{ECLevel, encode};
///
/// let symbol = encode("01234567", ECLevel::M).unwrap();
/// assert_eq!(symbol.version().number(), 1);
/// ```
pub fn encode<D: AsRef<[u8]>>(data: D, ec_level: ECLevel) -> Result<Symbol> {
    encode_segments(&[data], ec_level)
}

/// Encode several segments into one symbol, each in its own mode
pub fn encode_segments<S: AsRef<[u8]>>(segments: &[S], ec_level: ECLevel) -> Result<Symbol> {
    QrEncoder::with_config(EncoderConfig::new(ec_level)).encode(segments)
}
