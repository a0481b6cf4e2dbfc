//! QR code data mode encoders
//!
//! Payload packing for each supported data mode:
//! - Numeric: digits (0-9), 3 per 10 bits
//! - Alphanumeric: digits, upper-case letters and ` $%*+-./:`
//! - Byte: any 8-bit data

/// Alphanumeric mode
pub mod alphanumeric;
/// Byte mode
pub mod byte;
/// Numeric mode
pub mod numeric;

pub use alphanumeric::AlphanumericEncoder;
pub use byte::ByteEncoder;
pub use numeric::NumericEncoder;
