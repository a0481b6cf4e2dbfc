//! QR code encoding modules
//!
//! Everything between raw input bytes and a finished symbol:
//! - Segment classification and version selection
//! - Bit packing (numeric, alphanumeric, byte)
//! - Reed-Solomon error correction and block interleaving
//! - Function patterns, zig-zag placement, masking and penalty scoring
//! - Format and version information

/// Bit packing and data codeword assembly
pub mod bitstream;
/// Encoder settings (EC level, module size, quiet zone)
pub mod config;
/// Format information placement
pub mod format;
/// Finder, timing and alignment patterns plus reserved areas
pub mod function_patterns;
/// Error correction blocks and interleaving
pub mod interleave;
/// Mask application and selection
pub mod mask;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// Mask penalty rules
pub mod penalty;
/// Zig-zag codeword placement
pub mod placement;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction over GF(256)
pub mod reed_solomon;
/// Data segments and mode classification
pub mod segment;
/// ISO/IEC 18004 tables (capacity, alignment, format/version codes)
pub mod tables;
/// Version selection and version information (versions 7-40)
pub mod version;

pub use config::EncoderConfig;
pub use qr_encoder::QrEncoder;
