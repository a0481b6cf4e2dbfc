/// Mask application and selection
use log::trace;

use crate::encoder::penalty::PenaltyScore;
use crate::models::{MaskPattern, ModuleMatrix};

/// XOR the mask pattern into every non-fixed module
pub fn apply_mask(matrix: &mut ModuleMatrix, mask_pattern: MaskPattern) {
    let size = matrix.dimension();
    for row in 0..size {
        for col in 0..size {
            if !matrix.is_fixed(row, col) && mask_pattern.is_masked(row, col) {
                matrix.toggle(row, col);
            }
        }
    }
}

/// Winner of the mask search
#[derive(Debug, Clone)]
pub struct MaskChoice {
    /// Winning mask
    pub mask_pattern: MaskPattern,
    /// Penalty breakdown of the masked matrix
    pub score: PenaltyScore,
    /// Matrix with the mask applied, format area still blank
    pub matrix: ModuleMatrix,
}

/// Try all 8 masks in id order and keep the lowest total penalty. A later
/// mask only wins with a strictly lower score.
pub fn select_mask(unmasked: &ModuleMatrix) -> MaskChoice {
    let evaluate = |mask_pattern: MaskPattern| {
        let mut matrix = unmasked.clone();
        apply_mask(&mut matrix, mask_pattern);
        let score = PenaltyScore::evaluate(&matrix);
        trace!("mask {}: penalty {} ({:?})", mask_pattern.id(), score.total(), score);
        MaskChoice {
            mask_pattern,
            score,
            matrix,
        }
    };

    let mut best = evaluate(MaskPattern::Pattern0);
    for &mask_pattern in &MaskPattern::ALL[1..] {
        let candidate = evaluate(mask_pattern);
        if candidate.score.total() < best.score.total() {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_patterns::FunctionPatterns;
    use crate::encoder::placement::place_codewords;
    use crate::models::{Module, Version};

    const NUMERIC_FINAL: [u8; 26] = [
        0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
        0x11, 0xA5, 0x24, 0xD4, 0xC1, 0xED, 0x36, 0xC7, 0x87, 0x2C, 0x55,
    ];

    #[test]
    fn test_apply_mask_skips_fixed() {
        let mut matrix = FunctionPatterns::build(Version::MIN);
        let before = matrix.clone();
        apply_mask(&mut matrix, MaskPattern::Pattern0);
        // (0, 0) is finder, (10, 10) is data and masked by pattern 0
        assert_eq!(matrix.get(0, 0), before.get(0, 0));
        assert_eq!(matrix.get(10, 10), Some(Module::Data(true)));
        assert_eq!(matrix.get(10, 11), Some(Module::Empty));

        // Masking twice restores data cells
        apply_mask(&mut matrix, MaskPattern::Pattern0);
        assert_eq!(matrix.get(10, 10), Some(Module::Data(false)));
    }

    #[test]
    fn test_select_mask_reference_symbol() {
        let mut matrix = FunctionPatterns::build(Version::MIN);
        place_codewords(&mut matrix, &NUMERIC_FINAL).unwrap();
        let choice = select_mask(&matrix);
        assert_eq!(choice.mask_pattern, MaskPattern::Pattern0);
        assert_eq!(choice.score.runs, 177);
        assert_eq!(choice.score.blocks, 165);
        assert_eq!(choice.score.finder_like, 120);
        assert_eq!(choice.score.balance, 0);
        assert_eq!(choice.score.total(), 462);
    }

    #[test]
    fn test_select_mask_is_deterministic() {
        let mut matrix = FunctionPatterns::build(Version::new(3).unwrap());
        let codewords: Vec<u8> = (0..70u32).map(|i| (i * 29 + 7) as u8).collect();
        place_codewords(&mut matrix, &codewords).unwrap();
        let a = select_mask(&matrix);
        let b = select_mask(&matrix);
        assert_eq!(a.mask_pattern, b.mask_pattern);
        assert_eq!(a.matrix, b.matrix);
    }
}
