use crate::models::{ECLevel, Version};

/// Block structure of one (version, EC level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    /// Blocks in group 1
    pub blocks_group1: usize,
    /// Data codewords per group 1 block
    pub data_codewords_group1: usize,
    /// Blocks in group 2, possibly zero
    pub blocks_group2: usize,
    /// Data codewords per group 2 block (one more than group 1)
    pub data_codewords_group2: usize,
    /// Parity codewords per block, same for both groups
    pub ecc_per_block: usize,
    /// Total codewords in the symbol
    pub max_codewords: usize,
}

impl BlockLayout {
    /// Layout for a version and level
    pub fn lookup(version: Version, ec_level: ECLevel) -> Self {
        let v = version.number() as usize;
        let [b1, d1, b2, d2] = EC_BLOCK_INFO[v - 1][ec_level.index()];
        let max_codewords = MAX_CODEWORDS[v] as usize;
        let (b1, d1, b2, d2) = (b1 as usize, d1 as usize, b2 as usize, d2 as usize);
        let max_data = b1 * d1 + b2 * d2;
        Self {
            blocks_group1: b1,
            data_codewords_group1: d1,
            blocks_group2: b2,
            data_codewords_group2: d2,
            ecc_per_block: (max_codewords - max_data) / (b1 + b2),
            max_codewords,
        }
    }

    /// Blocks in both groups
    pub fn total_blocks(&self) -> usize {
        self.blocks_group1 + self.blocks_group2
    }

    /// Data codewords across all blocks
    pub fn max_data_codewords(&self) -> usize {
        self.blocks_group1 * self.data_codewords_group1
            + self.blocks_group2 * self.data_codewords_group2
    }

    /// Data capacity in bits
    pub fn max_data_bits(&self) -> usize {
        8 * self.max_data_codewords()
    }

    /// Data length of block `index`, group 1 blocks first
    pub fn data_len(&self, index: usize) -> usize {
        if index < self.blocks_group1 {
            self.data_codewords_group1
        } else {
            self.data_codewords_group2
        }
    }
}

// ISO/IEC 18004 Table 9.
// Index: [version - 1][ec_level] = [blocks group 1, data codewords group 1,
//                                   blocks group 2, data codewords group 2]
const EC_BLOCK_INFO: [[[u8; 4]; 4]; 40] = [
    [[1, 19, 0, 0], [1, 16, 0, 0], [1, 13, 0, 0], [1, 9, 0, 0]], // 1
    [[1, 34, 0, 0], [1, 28, 0, 0], [1, 22, 0, 0], [1, 16, 0, 0]], // 2
    [[1, 55, 0, 0], [1, 44, 0, 0], [2, 17, 0, 0], [2, 13, 0, 0]], // 3
    [[1, 80, 0, 0], [2, 32, 0, 0], [2, 24, 0, 0], [4, 9, 0, 0]], // 4
    [[1, 108, 0, 0], [2, 43, 0, 0], [2, 15, 2, 16], [2, 11, 2, 12]], // 5
    [[2, 68, 0, 0], [4, 27, 0, 0], [4, 19, 0, 0], [4, 15, 0, 0]], // 6
    [[2, 78, 0, 0], [4, 31, 0, 0], [2, 14, 4, 15], [4, 13, 1, 14]], // 7
    [[2, 97, 0, 0], [2, 38, 2, 39], [4, 18, 2, 19], [4, 14, 2, 15]], // 8
    [[2, 116, 0, 0], [3, 36, 2, 37], [4, 16, 4, 17], [4, 12, 4, 13]], // 9
    [[2, 68, 2, 69], [4, 43, 1, 44], [6, 19, 2, 20], [6, 15, 2, 16]], // 10
    [[4, 81, 0, 0], [1, 50, 4, 51], [4, 22, 4, 23], [3, 12, 8, 13]], // 11
    [[2, 92, 2, 93], [6, 36, 2, 37], [4, 20, 6, 21], [7, 14, 4, 15]], // 12
    [[4, 107, 0, 0], [8, 37, 1, 38], [8, 20, 4, 21], [12, 11, 4, 12]], // 13
    [[3, 115, 1, 116], [4, 40, 5, 41], [11, 16, 5, 17], [11, 12, 5, 13]], // 14
    [[5, 87, 1, 88], [5, 41, 5, 42], [5, 24, 7, 25], [11, 12, 7, 13]], // 15
    [[5, 98, 1, 99], [7, 45, 3, 46], [15, 19, 2, 20], [3, 15, 13, 16]], // 16
    [[1, 107, 5, 108], [10, 46, 1, 47], [1, 22, 15, 23], [2, 14, 17, 15]], // 17
    [[5, 120, 1, 121], [9, 43, 4, 44], [17, 22, 1, 23], [2, 14, 19, 15]], // 18
    [[3, 113, 4, 114], [3, 44, 11, 45], [17, 21, 4, 22], [9, 13, 16, 14]], // 19
    [[3, 107, 5, 108], [3, 41, 13, 42], [15, 24, 5, 25], [15, 15, 10, 16]], // 20
    [[4, 116, 4, 117], [17, 42, 0, 0], [17, 22, 6, 23], [19, 16, 6, 17]], // 21
    [[2, 111, 7, 112], [17, 46, 0, 0], [7, 24, 16, 25], [34, 13, 0, 0]], // 22
    [[4, 121, 5, 122], [4, 47, 14, 48], [11, 24, 14, 25], [16, 15, 14, 16]], // 23
    [[6, 117, 4, 118], [6, 45, 14, 46], [11, 24, 16, 25], [30, 16, 2, 17]], // 24
    [[8, 106, 4, 107], [8, 47, 13, 48], [7, 24, 22, 25], [22, 15, 13, 16]], // 25
    [[10, 114, 2, 115], [19, 46, 4, 47], [28, 22, 6, 23], [33, 16, 4, 17]], // 26
    [[8, 122, 4, 123], [22, 45, 3, 46], [8, 23, 26, 24], [12, 15, 28, 16]], // 27
    [[3, 117, 10, 118], [3, 45, 23, 46], [4, 24, 31, 25], [11, 15, 31, 16]], // 28
    [[7, 116, 7, 117], [21, 45, 7, 46], [1, 23, 37, 24], [19, 15, 26, 16]], // 29
    [[5, 115, 10, 116], [19, 47, 10, 48], [15, 24, 25, 25], [23, 15, 25, 16]], // 30
    [[13, 115, 3, 116], [2, 46, 29, 47], [42, 24, 1, 25], [23, 15, 28, 16]], // 31
    [[17, 115, 0, 0], [10, 46, 23, 47], [10, 24, 35, 25], [19, 15, 35, 16]], // 32
    [[17, 115, 1, 116], [14, 46, 21, 47], [29, 24, 19, 25], [11, 15, 46, 16]], // 33
    [[13, 115, 6, 116], [14, 46, 23, 47], [44, 24, 7, 25], [59, 16, 1, 17]], // 34
    [[12, 121, 7, 122], [12, 47, 26, 48], [39, 24, 14, 25], [22, 15, 41, 16]], // 35
    [[6, 121, 14, 122], [6, 47, 34, 48], [46, 24, 10, 25], [2, 15, 64, 16]], // 36
    [[17, 122, 4, 123], [29, 46, 14, 47], [49, 24, 10, 25], [24, 15, 46, 16]], // 37
    [[4, 122, 18, 123], [13, 46, 32, 47], [48, 24, 14, 25], [42, 15, 32, 16]], // 38
    [[20, 117, 4, 118], [40, 47, 7, 48], [43, 24, 22, 25], [10, 15, 67, 16]], // 39
    [[19, 118, 6, 119], [18, 47, 31, 48], [34, 24, 34, 25], [20, 15, 61, 16]], // 40
];

/// Total codewords (data + error correction) per version. Index 0 unused.
pub const MAX_CODEWORDS: [u16; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901,
    991, 1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611,
    2761, 2876, 3034, 3196, 3362, 3532, 3706,
];

/// Alignment pattern center coordinates per version (index = version - 1)
pub const ALIGNMENT_POSITIONS: [&[u8]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// 15-bit format information with BCH(15,5) parity, already XORed with 0x5412.
/// Index: (ec format bits << 3) | mask, format bits M=00, L=01, H=10, Q=11
pub const FORMAT_INFO: [u16; 32] = [
    0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0,
    0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976,
    0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B,
    0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED,
];

/// 18-bit version information with BCH(18,6) parity for versions 7-40
pub const VERSION_INFO: [u32; 34] = [
    0x07C94, 0x085BC, 0x09A99, 0x0A4D3, 0x0BBF6, 0x0C762, 0x0D847, 0x0E60D, 0x0F928, 0x10B78,
    0x1145D, 0x12A17, 0x13532, 0x149A6, 0x15683, 0x168C9, 0x177EC, 0x18EC4, 0x191E1, 0x1AFAB,
    0x1B08E, 0x1CC1A, 0x1D33F, 0x1ED75, 0x1F250, 0x209D5, 0x216F0, 0x228BA, 0x2379F, 0x24B0B,
    0x2542E, 0x26A64, 0x27541, 0x28C69,
];

/// Characters of the alphanumeric mode, in code order
pub const ALPHANUMERIC_CHARSET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Code value of a byte: 0-9 digits, 10-44 alphanumeric, 45 for anything else
pub const ENCODING_TABLE: [u8; 256] = build_encoding_table();

const fn build_encoding_table() -> [u8; 256] {
    let mut table = [45u8; 256];
    let mut i = 0;
    while i < ALPHANUMERIC_CHARSET.len() {
        table[ALPHANUMERIC_CHARSET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Alignment pattern centres, empty for version 1
pub fn alignment_positions(version: Version) -> &'static [u8] {
    ALIGNMENT_POSITIONS[version.number() as usize - 1]
}

/// Masked format code for a level and mask id
pub fn format_info(ec_level: ECLevel, mask_id: u8) -> u16 {
    FORMAT_INFO[((ec_level.format_bits() as usize) << 3) | (mask_id as usize & 7)]
}

/// `None` below version 7
pub fn version_info(version: Version) -> Option<u32> {
    let v = version.number() as usize;
    (v >= 7).then(|| VERSION_INFO[v - 7])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_layout_matches_standard() {
        let v5q = BlockLayout::lookup(Version::new(5).unwrap(), ECLevel::Q);
        assert_eq!(v5q.blocks_group1, 2);
        assert_eq!(v5q.data_codewords_group1, 15);
        assert_eq!(v5q.blocks_group2, 2);
        assert_eq!(v5q.data_codewords_group2, 16);
        assert_eq!(v5q.ecc_per_block, 18);

        let v40h = BlockLayout::lookup(Version::MAX, ECLevel::H);
        assert_eq!(v40h.total_blocks(), 81);
        assert_eq!(v40h.ecc_per_block, 30);
        assert_eq!(v40h.max_data_codewords(), 1276);
    }

    #[test]
    fn test_layout_is_consistent_for_every_version() {
        for version in Version::all() {
            for ec in ECLevel::ALL {
                let layout = BlockLayout::lookup(version, ec);
                let ecc_total = layout.ecc_per_block * layout.total_blocks();
                assert_eq!(layout.max_data_codewords() + ecc_total, layout.max_codewords);
                if layout.blocks_group2 > 0 {
                    assert_eq!(layout.data_codewords_group2, layout.data_codewords_group1 + 1);
                }
            }
        }
    }

    #[test]
    fn test_max_codewords_indexed_by_version() {
        assert_eq!(MAX_CODEWORDS[0], 0);
        assert_eq!(MAX_CODEWORDS[1], 26);
        assert_eq!(MAX_CODEWORDS[7], 196);
        assert_eq!(MAX_CODEWORDS[40], 3706);
        assert!(MAX_CODEWORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_format_info_bch() {
        // Every code must divide evenly by the BCH(15,5) generator once unmasked
        for (index, &code) in FORMAT_INFO.iter().enumerate() {
            let raw = (code ^ 0x5412) as u32;
            assert_eq!(raw >> 10, index as u32);
            let mut rem = raw;
            for shift in (0..5).rev() {
                if rem & (1 << (shift + 10)) != 0 {
                    rem ^= 0x537 << shift;
                }
            }
            assert_eq!(rem, 0);
        }
        assert_eq!(format_info(ECLevel::L, 0), 0x77C4);
        assert_eq!(format_info(ECLevel::M, 0), 0x5412);
    }

    #[test]
    fn test_version_info_bch() {
        for version in Version::all().filter(|v| v.has_version_info()) {
            let code = version_info(version).unwrap();
            assert_eq!(code >> 12, version.number() as u32);
            let mut rem = code;
            for shift in (0..6).rev() {
                if rem & (1 << (shift + 12)) != 0 {
                    rem ^= 0x1F25 << shift;
                }
            }
            assert_eq!(rem, 0);
        }
        assert_eq!(version_info(Version::new(6).unwrap()), None);
        assert_eq!(version_info(Version::new(7).unwrap()), Some(0x07C94));
    }

    #[test]
    fn test_encoding_table() {
        assert_eq!(ENCODING_TABLE[b'0' as usize], 0);
        assert_eq!(ENCODING_TABLE[b'9' as usize], 9);
        assert_eq!(ENCODING_TABLE[b'A' as usize], 10);
        assert_eq!(ENCODING_TABLE[b' ' as usize], 36);
        assert_eq!(ENCODING_TABLE[b':' as usize], 44);
        assert_eq!(ENCODING_TABLE[b'a' as usize], 45);
        assert_eq!(ENCODING_TABLE[0xFF], 45);
    }

    #[test]
    fn test_alignment_positions() {
        assert!(alignment_positions(Version::MIN).is_empty());
        assert_eq!(alignment_positions(Version::new(7).unwrap()), &[6, 22, 38]);
        let last = alignment_positions(Version::MAX);
        assert_eq!(*last.last().unwrap() as usize, Version::MAX.dimension() - 7);
    }
}
