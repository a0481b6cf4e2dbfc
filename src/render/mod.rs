//! Symbol rendering
//!
//! - `png`: bit-exact 1-bit grayscale PNG writer
//! - `raster`: boolean pixel grid and `image` buffers
//! - `checksum`: CRC-32 and Adler-32

/// CRC-32 and Adler-32
pub mod checksum;
/// PNG container and scanline layout
pub mod png;
/// Pixel rasters with quiet zone
pub mod raster;

pub use png::{image_dimension, scanlines, write_png};
pub use raster::{to_image, to_pixels};
