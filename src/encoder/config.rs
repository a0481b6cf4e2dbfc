use std::str::FromStr;

use crate::error::{QrError, Result};
use crate::models::ECLevel;

/// Largest module size in pixels
pub const MAX_MODULE_SIZE: usize = 100;
/// Largest quiet zone in pixels
pub const MAX_QUIET_ZONE: usize = 400;

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
}

/// Encoding and rendering settings. Changes apply to the next encode or render
/// call; symbols already produced never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    ec_level: ECLevel,
    module_size: usize,
    quiet_zone: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::M,
            module_size: 2,
            quiet_zone: 8,
        }
    }
}

impl EncoderConfig {
    /// Default sizes with the given error correction level
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            ..Self::default()
        }
    }

    /// Defaults overridden by `QR_EC_LEVEL`, `QR_MODULE_SIZE` and `QR_QUIET_ZONE`.
    /// Unparsable values are ignored, parsable ones must pass the setters.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(ec_level) = parse_env::<ECLevel>("QR_EC_LEVEL") {
            config.set_ec_level(ec_level);
        }
        if let Some(module_size) = parse_env::<usize>("QR_MODULE_SIZE") {
            config.set_module_size(module_size)?;
        }
        if let Some(quiet_zone) = parse_env::<usize>("QR_QUIET_ZONE") {
            config.set_quiet_zone(quiet_zone)?;
        }
        Ok(config)
    }

    /// Error correction level for the next encode
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Level used from the next encode on
    pub fn set_ec_level(&mut self, ec_level: ECLevel) {
        self.ec_level = ec_level;
    }

    /// Pixels per module
    pub fn module_size(&self) -> usize {
        self.module_size
    }

    /// Set pixels per module (1-100). Raises the quiet zone to four modules
    /// when it would fall below that.
    pub fn set_module_size(&mut self, module_size: usize) -> Result<()> {
        if !(1..=MAX_MODULE_SIZE).contains(&module_size) {
            return Err(QrError::InvalidModuleSize(module_size));
        }
        self.module_size = module_size;
        self.quiet_zone = self.quiet_zone.max(self.min_quiet_zone());
        Ok(())
    }

    /// Quiet zone width in pixels
    pub fn quiet_zone(&self) -> usize {
        self.quiet_zone
    }

    /// Set the quiet zone in pixels, from four modules up to 400
    pub fn set_quiet_zone(&mut self, quiet_zone: usize) -> Result<()> {
        let min = self.min_quiet_zone();
        if !(min..=MAX_QUIET_ZONE).contains(&quiet_zone) {
            return Err(QrError::InvalidQuietZone { quiet_zone, min });
        }
        self.quiet_zone = quiet_zone;
        Ok(())
    }

    fn min_quiet_zone(&self) -> usize {
        4 * self.module_size
    }
}
