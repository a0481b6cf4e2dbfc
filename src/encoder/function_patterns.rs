/// Fixed skeleton of a symbol: finder, timing and alignment patterns plus the
/// reserved format/version areas and the dark module
use crate::encoder::tables::alignment_positions;
use crate::models::{ModuleMatrix, Version};

/// Builder for the symbol skeleton
pub struct FunctionPatterns;

impl FunctionPatterns {
    /// Build the skeleton for `version`. Every cell not marked fixed here is a
    /// data cell.
    pub fn build(version: Version) -> ModuleMatrix {
        let size = version.dimension();
        let mut matrix = ModuleMatrix::new(size);

        // Finder patterns + separators (9x9 areas, clipped to bounds)
        Self::draw_finder(&mut matrix, 0, 0);
        Self::draw_finder(&mut matrix, 0, size - 7);
        Self::draw_finder(&mut matrix, size - 7, 0);

        // Timing patterns (row 6 and column 6) between the finders
        for i in 8..size - 8 {
            matrix.set_fixed(6, i, i % 2 == 0);
            matrix.set_fixed(i, 6, i % 2 == 0);
        }

        // Alignment patterns, skipping the three finder corners
        let align = alignment_positions(version);
        let last = align.len().saturating_sub(1);
        for (i, &row) in align.iter().enumerate() {
            for (j, &col) in align.iter().enumerate() {
                let in_tl = i == 0 && j == 0;
                let in_tr = i == 0 && j == last;
                let in_bl = i == last && j == 0;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                Self::draw_alignment(&mut matrix, row as usize, col as usize);
            }
        }

        // Format info areas, light until the mask is chosen
        for i in 0..9 {
            if !matrix.is_fixed(8, i) {
                matrix.set_fixed(8, i, false);
            }
            if !matrix.is_fixed(i, 8) {
                matrix.set_fixed(i, 8, false);
            }
        }
        for i in 0..8 {
            matrix.set_fixed(8, size - 1 - i, false);
            matrix.set_fixed(size - 1 - i, 8, false);
        }

        // Dark module
        matrix.set_fixed(size - 8, 8, true);

        // Version info (v7+)
        if version.has_version_info() {
            for a in 0..6 {
                for b in size - 11..size - 8 {
                    matrix.set_fixed(a, b, false);
                    matrix.set_fixed(b, a, false);
                }
            }
        }

        matrix
    }

    fn draw_finder(matrix: &mut ModuleMatrix, top: usize, left: usize) {
        for dr in -1..=7isize {
            for dc in -1..=7isize {
                let (Some(row), Some(col)) = (top.checked_add_signed(dr), left.checked_add_signed(dc))
                else {
                    continue;
                };
                if row >= matrix.dimension() || col >= matrix.dimension() {
                    continue;
                }
                let ring = dr.max(dc) == 6 || dr.min(dc) == 0;
                let core = (2..=4).contains(&dr) && (2..=4).contains(&dc);
                let inside = (0..=6).contains(&dr) && (0..=6).contains(&dc);
                matrix.set_fixed(row, col, inside && (ring || core));
            }
        }
    }

    fn draw_alignment(matrix: &mut ModuleMatrix, row: usize, col: usize) {
        for dr in -2..=2isize {
            for dc in -2..=2isize {
                let dark = dr.abs().max(dc.abs()) != 1;
                matrix.set_fixed(row.wrapping_add_signed(dr), col.wrapping_add_signed(dc), dark);
            }
        }
    }
}
