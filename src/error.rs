//! Error types for QR encoding and rendering.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::ECLevel;

/// Result type alias for encoder operations.
pub type Result<T> = std::result::Result<T, QrError>;

/// Errors that can occur while configuring, encoding or rendering a symbol.
#[derive(Error, Debug)]
pub enum QrError {
    /// Error correction level is not one of L, M, Q, H.
    #[error("invalid error correction level {0:?}, must be L, M, Q or H")]
    InvalidErrorCorrection(String),

    /// Module size outside 1..=100 pixels.
    #[error("module size {0} out of range, must be 1 to 100 pixels")]
    InvalidModuleSize(usize),

    /// Quiet zone below four modules or above 400 pixels.
    #[error("quiet zone {quiet_zone} out of range, must be {min} to 400 pixels")]
    InvalidQuietZone {
        /// Rejected width in pixels
        quiet_zone: usize,
        /// Four modules at the current module size
        min: usize,
    },

    /// No segments were passed to the encoder.
    #[error("no data segments to encode")]
    NoSegments,

    /// One of the segments has no bytes.
    #[error("data segment {index} is empty")]
    EmptySegment {
        /// Position in the segment list
        index: usize,
    },

    /// Data does not fit a version 40 symbol at the requested level.
    #[error("symbol too large: {bits} data bits exceed version 40 capacity at level {ec_level}")]
    DataTooLarge {
        /// Encoded size at version 40
        bits: usize,
        /// Requested level
        ec_level: ECLevel,
    },

    /// A stage produced a different amount of data than the capacity tables allow.
    #[error("capacity mismatch: expected {expected}, got {actual}")]
    CapacityMismatch {
        /// Count the tables call for
        expected: usize,
        /// Count actually produced
        actual: usize,
    },

    /// No generator polynomial exists for this parity length.
    #[error("no generator polynomial for {0} error correction codewords")]
    UnsupportedEccLength(usize),

    /// Output file name does not end in `.png`.
    #[error("output file {0:?} must have a .png extension")]
    InvalidFileName(PathBuf),

    /// I/O error while writing image output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
