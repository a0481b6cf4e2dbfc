/// Format information placement
use crate::encoder::tables::format_info;
use crate::models::{ECLevel, MaskPattern, ModuleMatrix};

/// Format info is 15 bits (5 data + 10 ECC)
/// Written twice, flanking the top-left finder and split across the other two
pub struct FormatInfo {
    /// Level encoded in bits 14-13
    pub ec_level: ECLevel,
    /// Mask encoded in bits 12-10
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Format information for a level and mask
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// Masked 15-bit code from the lookup table
    pub fn bits(&self) -> u16 {
        format_info(self.ec_level, self.mask_pattern.id())
    }

    /// Write both copies into the reserved cells
    pub fn write(&self, matrix: &mut ModuleMatrix) {
        let code = self.bits();
        let size = matrix.dimension();
        for i in 0..15 {
            let bit = (code >> i) & 1 == 1;

            // Around the top-left finder: up column 8, then left along row 8
            let (row, col) = match i {
                0..=5 => (i, 8),
                6 => (7, 8),
                7 => (8, 8),
                8 => (8, 7),
                _ => (8, 14 - i),
            };
            matrix.set_fixed(row, col, bit);

            // Row 8 under the top-right finder, then column 8 beside the bottom-left
            let (row, col) = if i < 8 {
                (8, size - 1 - i)
            } else {
                (size - 15 + i, 8)
            };
            matrix.set_fixed(row, col, bit);
        }
    }
}
