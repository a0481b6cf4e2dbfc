use std::fmt;
use std::str::FromStr;

use super::ModuleMatrix;
use crate::error::{QrError, Result};

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol version
    pub const MIN: Version = Version(1);
    /// Largest symbol version
    pub const MAX: Version = Version(40);

    /// Create a version, `None` outside 1..=40
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Version(number))
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn dimension(&self) -> usize {
        17 + 4 * self.0 as usize
    }

    /// Versions 7 and up carry the 18-bit version information blocks
    pub fn has_version_info(&self) -> bool {
        self.0 >= 7
    }

    /// Iterate all versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }

    /// Character count tier: 0 for v1-9, 1 for v10-26, 2 for v27-40
    pub(crate) fn count_tier(&self) -> usize {
        match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    #[default]
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels, weakest first
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Level from its table index (0=L, 1=M, 2=Q, 3=H)
    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            0 => Ok(ECLevel::L),
            1 => Ok(ECLevel::M),
            2 => Ok(ECLevel::Q),
            3 => Ok(ECLevel::H),
            other => Err(QrError::InvalidErrorCorrection(other.to_string())),
        }
    }

    /// Row index into the capacity tables
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Two-bit code written into format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.write_str(name)
    }
}

impl FromStr for ECLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(ECLevel::L),
            "m" | "medium" => Ok(ECLevel::M),
            "q" | "quarter" | "quartile" => Ok(ECLevel::Q),
            "h" | "high" => Ok(ECLevel::H),
            _ => Err(QrError::InvalidErrorCorrection(s.to_string())),
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All patterns in evaluation order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit id
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Mask id (0-7)
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if the module at row `i`, column `j` is inverted by this mask
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Encoding mode of one data segment. Discriminants are the 4-bit mode indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EncodingMode {
    /// Digits only, 3 per 10 bits
    Numeric = 0b0001,
    /// 45-character set, 2 per 11 bits
    AlphaNumeric = 0b0010,
    /// Any byte, 8 bits each
    Byte = 0b0100,
}

impl EncodingMode {
    /// 4-bit mode indicator
    pub fn indicator(&self) -> u32 {
        *self as u32
    }

    /// Width of the character count field for a given version
    pub fn count_bits(&self, version: Version) -> usize {
        const WIDTHS: [[usize; 3]; 3] = [[10, 12, 14], [9, 11, 13], [8, 16, 16]];
        let row = match self {
            EncodingMode::Numeric => 0,
            EncodingMode::AlphaNumeric => 1,
            EncodingMode::Byte => 2,
        };
        WIDTHS[row][version.count_tier()]
    }
}

/// An encoded QR symbol. Created once per encode call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    version: Version,
    ec_level: ECLevel,
    mask_pattern: MaskPattern,
    matrix: ModuleMatrix,
}

impl Symbol {
    pub(crate) fn new(
        version: Version,
        ec_level: ECLevel,
        mask_pattern: MaskPattern,
        matrix: ModuleMatrix,
    ) -> Self {
        Self {
            version,
            ec_level,
            mask_pattern,
            matrix,
        }
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Modules per side, `17 + 4 * version`
    pub fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    /// Error correction level the symbol was encoded with
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Mask committed to the symbol
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Full module matrix, including fixed-pattern flags
    pub fn matrix(&self) -> &ModuleMatrix {
        &self.matrix
    }

    /// True when the module at (row, col) is black. Out of range reads as white.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.matrix.is_dark(row, col)
    }

    /// Rows of black (true) / white (false) modules
    pub fn to_bool_rows(&self) -> Vec<Vec<bool>> {
        (0..self.dimension())
            .map(|row| (0..self.dimension()).map(|col| self.is_dark(row, col)).collect())
            .collect()
    }
}
