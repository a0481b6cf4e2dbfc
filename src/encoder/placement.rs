/// Codeword placement along the zig-zag path
use crate::error::{QrError, Result};
use crate::models::ModuleMatrix;

/// Position within a two-column strip of the zig-zag path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Right column, moving up
    UpRightCol,
    /// Left column, moving up
    UpLeftCol,
    /// Right column, moving down
    DownRightCol,
    /// Left column, moving down
    DownLeftCol,
}

/// Cell after `(row, col)` in state `step`, `None` once the left edge is passed.
///
/// Strips run two columns wide from the right edge, alternating upward and
/// downward. Column 6 (vertical timing) never starts a strip.
pub fn advance(
    step: Step,
    row: usize,
    col: usize,
    dimension: usize,
) -> Option<(Step, usize, usize)> {
    let next_strip = |left: usize| match left.checked_sub(1)? {
        6 => Some(5),
        c => Some(c),
    };
    match step {
        Step::UpRightCol => Some((Step::UpLeftCol, row, col - 1)),
        Step::UpLeftCol if row > 0 => Some((Step::UpRightCol, row - 1, col + 1)),
        Step::UpLeftCol => next_strip(col).map(|c| (Step::DownRightCol, 0, c)),
        Step::DownRightCol => Some((Step::DownLeftCol, row, col - 1)),
        Step::DownLeftCol if row + 1 < dimension => Some((Step::DownRightCol, row + 1, col + 1)),
        Step::DownLeftCol => next_strip(col).map(|c| (Step::UpRightCol, dimension - 1, c)),
    }
}

/// Every cell of the symbol in placement order, fixed cells included
pub struct ZigZag {
    dimension: usize,
    state: Option<(Step, usize, usize)>,
}

impl ZigZag {
    /// Walk starting at the bottom-right corner
    pub fn new(dimension: usize) -> Self {
        let state = (dimension >= 2).then(|| (Step::UpRightCol, dimension - 1, dimension - 1));
        Self { dimension, state }
    }
}

impl Iterator for ZigZag {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (step, row, col) = self.state?;
        self.state = advance(step, row, col, self.dimension);
        Some((row, col))
    }
}

/// Write the codeword bits, bit 7 of byte 0 first, into the data cells in
/// zig-zag order. Cells left over after the last bit stay empty (light).
pub fn place_codewords(matrix: &mut ModuleMatrix, codewords: &[u8]) -> Result<()> {
    let total = codewords.len() * 8;
    let mut placed = 0;

    for (row, col) in ZigZag::new(matrix.dimension()) {
        if placed == total {
            break;
        }
        if matrix.is_fixed(row, col) {
            continue;
        }
        let bit = (codewords[placed >> 3] >> (7 - (placed & 7))) & 1 == 1;
        matrix.set_data(row, col, bit);
        placed += 1;
    }

    if placed != total {
        return Err(QrError::CapacityMismatch {
            expected: total,
            actual: placed,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_patterns::FunctionPatterns;
    use crate::encoder::tables::MAX_CODEWORDS;
    use crate::models::{Module, Version};
    use std::collections::HashSet;

    #[test]
    fn test_zigzag_start() {
        let path: Vec<_> = ZigZag::new(21).take(6).collect();
        assert_eq!(path, vec![(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19)]);
    }

    #[test]
    fn test_zigzag_turns_at_top() {
        assert_eq!(
            advance(Step::UpLeftCol, 0, 19, 21),
            Some((Step::DownRightCol, 0, 18))
        );
        assert_eq!(
            advance(Step::DownLeftCol, 20, 17, 21),
            Some((Step::UpRightCol, 20, 16))
        );
    }

    #[test]
    fn test_zigzag_skips_timing_column() {
        // Strip 8/7 ends going up, the next strip starts at column 5
        assert_eq!(
            advance(Step::UpLeftCol, 0, 7, 21),
            Some((Step::DownRightCol, 0, 5))
        );
        assert_eq!(advance(Step::DownLeftCol, 20, 0, 21), None);
        assert!(ZigZag::new(21).all(|(_, col)| col != 6));
    }

    #[test]
    fn test_zigzag_visits_every_cell_once() {
        for version in Version::all() {
            let dim = version.dimension();
            let cells: Vec<_> = ZigZag::new(dim).collect();
            assert_eq!(cells.len(), dim * (dim - 1));
            let unique: HashSet<_> = cells.iter().copied().collect();
            assert_eq!(unique.len(), cells.len());
        }
    }

    #[test]
    fn test_placement_fills_data_cells() {
        for version in Version::all() {
            let max = MAX_CODEWORDS[version.number() as usize] as usize;
            let mut matrix = FunctionPatterns::build(version);
            let capacity = matrix.data_capacity();
            place_codewords(&mut matrix, &vec![0xFF; max]).unwrap();

            let dark_data = (0..matrix.dimension())
                .flat_map(|r| matrix.row(r).to_vec())
                .filter(|m| *m == Module::Data(true))
                .count();
            assert_eq!(dark_data, 8 * max);
            assert!(capacity - 8 * max < 8);
        }
    }

    #[test]
    fn test_placement_bit_order() {
        let mut matrix = FunctionPatterns::build(Version::MIN);
        let mut codewords = vec![0u8; 26];
        codewords[0] = 0b1010_0000;
        place_codewords(&mut matrix, &codewords).unwrap();
        assert_eq!(matrix.get(20, 20), Some(Module::Data(true)));
        assert_eq!(matrix.get(20, 19), Some(Module::Data(false)));
        assert_eq!(matrix.get(19, 20), Some(Module::Data(true)));
    }

    #[test]
    fn test_placement_overflow() {
        let mut matrix = FunctionPatterns::build(Version::MIN);
        let result = place_codewords(&mut matrix, &[0u8; 27]);
        assert!(matches!(
            result,
            Err(QrError::CapacityMismatch {
                expected: 216,
                actual: 208
            })
        ));
    }
}
