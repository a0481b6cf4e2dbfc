/// Block splitting, error correction and interleaving
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::BlockLayout;
use crate::error::{QrError, Result};

/// One error correction block: a run of data codewords and its parity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcBlock<'a> {
    /// Data codewords of this block
    pub data: &'a [u8],
    /// Reed-Solomon parity for `data`
    pub ecc: Vec<u8>,
}

/// Split the data codewords into the layout's blocks, group 1 first, and
/// compute each block's parity
pub fn build_blocks<'a>(data: &'a [u8], layout: &BlockLayout) -> Result<Vec<EcBlock<'a>>> {
    if data.len() != layout.max_data_codewords() {
        return Err(QrError::CapacityMismatch {
            expected: layout.max_data_codewords(),
            actual: data.len(),
        });
    }

    let rs = ReedSolomonEncoder::new(layout.ecc_per_block)?;
    let mut blocks = Vec::with_capacity(layout.total_blocks());
    let mut rest = data;
    for index in 0..layout.total_blocks() {
        let (block, tail) = rest.split_at(layout.data_len(index));
        rest = tail;
        blocks.push(EcBlock {
            data: block,
            ecc: rs.encode(block),
        });
    }
    Ok(blocks)
}

/// Final transmission order: data round-robin (short blocks drop out first),
/// then parity round-robin
pub fn interleave(blocks: &[EcBlock<'_>]) -> Vec<u8> {
    let max_data = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    let ecc_len = blocks.first().map_or(0, |b| b.ecc.len());
    let total = blocks.iter().map(|b| b.data.len() + b.ecc.len()).sum();

    let mut out = Vec::with_capacity(total);
    for i in 0..max_data {
        out.extend(blocks.iter().filter_map(|b| b.data.get(i)));
    }
    for i in 0..ecc_len {
        out.extend(blocks.iter().filter_map(|b| b.ecc.get(i)));
    }
    out
}

/// Error-correct and interleave a full data codeword stream. The result has
/// exactly `layout.max_codewords` bytes.
pub fn final_codewords(data: &[u8], layout: &BlockLayout) -> Result<Vec<u8>> {
    let blocks = build_blocks(data, layout)?;
    let out = interleave(&blocks);
    if out.len() != layout.max_codewords {
        return Err(QrError::CapacityMismatch {
            expected: layout.max_codewords,
            actual: out.len(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ECLevel, Version};

    #[test]
    fn test_interleave_uneven_blocks() {
        let blocks = [
            EcBlock {
                data: &[1, 2],
                ecc: vec![10, 11],
            },
            EcBlock {
                data: &[3, 4, 5],
                ecc: vec![12, 13],
            },
            EcBlock {
                data: &[6, 7, 8],
                ecc: vec![14, 15],
            },
        ];
        assert_eq!(
            interleave(&blocks),
            vec![1, 3, 6, 2, 4, 7, 5, 8, 10, 12, 14, 11, 13, 15]
        );
    }

    #[test]
    fn test_build_blocks_uses_group_sizes() {
        let layout = BlockLayout::lookup(Version::new(5).unwrap(), ECLevel::Q);
        let data: Vec<u8> = (0..62).collect();
        let blocks = build_blocks(&data, &layout).unwrap();
        let lens: Vec<usize> = blocks.iter().map(|b| b.data.len()).collect();
        assert_eq!(lens, vec![15, 15, 16, 16]);
        assert!(blocks.iter().all(|b| b.ecc.len() == 18));
        assert_eq!(blocks[2].data[0], 30);
    }

    #[test]
    fn test_final_codewords_length_every_version() {
        for version in Version::all() {
            for ec in ECLevel::ALL {
                let layout = BlockLayout::lookup(version, ec);
                let data = vec![0xA5; layout.max_data_codewords()];
                let out = final_codewords(&data, &layout).unwrap();
                assert_eq!(out.len(), layout.max_codewords);
            }
        }
    }

    #[test]
    fn test_wrong_data_length_is_rejected() {
        let layout = BlockLayout::lookup(Version::MIN, ECLevel::M);
        assert!(matches!(
            final_codewords(&[0; 15], &layout),
            Err(QrError::CapacityMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }
}
