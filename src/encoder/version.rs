/// Version selection and version information placement (v7+)
use crate::encoder::segment::DataSegment;
use crate::encoder::tables::{BlockLayout, version_info};
use crate::error::{QrError, Result};
use crate::models::{ECLevel, ModuleMatrix, Version};

/// Smallest version whose data capacity holds every segment.
///
/// The count field width depends on the version, so the total is recomputed
/// for each candidate instead of being derived once.
pub fn select_version(segments: &[DataSegment<'_>], ec_level: ECLevel) -> Result<Version> {
    let mut bits = 0;
    for version in Version::all() {
        bits = segments.iter().map(|s| s.bit_len(version)).sum::<usize>();
        let capacity = BlockLayout::lookup(version, ec_level).max_data_bits();
        if bits <= capacity {
            return Ok(version);
        }
    }
    Err(QrError::DataTooLarge { bits, ec_level })
}

/// Version info is 18 bits (6 data + 12 ECC) for versions 7-40
pub struct VersionInfo;

impl VersionInfo {
    /// Write both copies of the version information. No-op below version 7.
    ///
    /// Bit `i` (LSB first) lands at row `i / 3`, column `dim - 11 + i % 3` in the
    /// top-right block and transposed in the bottom-left block.
    pub fn write(matrix: &mut ModuleMatrix, version: Version) {
        let Some(code) = version_info(version) else {
            return;
        };
        let size = matrix.dimension();
        for i in 0..18 {
            let bit = (code >> i) & 1 == 1;
            let a = i / 3;
            let b = size - 11 + i % 3;
            matrix.set_fixed(a, b, bit);
            matrix.set_fixed(b, a, bit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_smallest_version() {
        let segments = [DataSegment::new(b"01234567")];
        assert_eq!(select_version(&segments, ECLevel::M).unwrap(), Version::MIN);

        // 17 bytes fit version 1-L exactly, 18 spill to version 2
        let data = [b'a'; 18];
        let segments = [DataSegment::new(&data[..17])];
        assert_eq!(select_version(&segments, ECLevel::L).unwrap(), Version::MIN);
        let segments = [DataSegment::new(&data)];
        assert_eq!(select_version(&segments, ECLevel::L).unwrap().number(), 2);
    }

    #[test]
    fn test_select_version_crosses_count_tier() {
        // 231 bytes need 1860 bits at v9 (capacity 1856 at L), 1868 at v10
        let data = vec![0x80u8; 231];
        let segments = [DataSegment::new(&data)];
        assert_eq!(select_version(&segments, ECLevel::L).unwrap().number(), 10);
    }

    #[test]
    fn test_select_version_too_large() {
        let data = vec![0u8; 1273];
        let segments = [DataSegment::new(&data)];
        assert_eq!(select_version(&segments, ECLevel::H).unwrap(), Version::MAX);

        let data = vec![0u8; 1274];
        let segments = [DataSegment::new(&data)];
        match select_version(&segments, ECLevel::H) {
            Err(QrError::DataTooLarge { bits, ec_level }) => {
                assert_eq!(bits, 4 + 16 + 8 * 1274);
                assert_eq!(ec_level, ECLevel::H);
            }
            other => panic!("expected DataTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_version_info_placement() {
        let version = Version::new(7).unwrap();
        let mut matrix = ModuleMatrix::new(version.dimension());
        VersionInfo::write(&mut matrix, version);
        let size = version.dimension();
        // 0x07C94: bit 0 = 0, bit 2 = 1, bit 17 = 0
        assert!(!matrix.is_dark(0, size - 11));
        assert!(matrix.is_dark(0, size - 9));
        assert!(matrix.is_dark(size - 9, 0));
        assert!(!matrix.is_dark(5, size - 9));
        assert!(matrix.is_fixed(5, size - 9));

        let mut small = ModuleMatrix::new(Version::MIN.dimension());
        VersionInfo::write(&mut small, Version::MIN);
        assert_eq!(small.data_capacity(), 21 * 21);
    }
}
