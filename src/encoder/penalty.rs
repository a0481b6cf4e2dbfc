/// Mask penalty scoring (ISO/IEC 18004 section 7.8.3)
use crate::models::ModuleMatrix;

const N1: u32 = 3;
const N2: u32 = 3;
const N3: u32 = 40;
const N4: u32 = 10;

/// Scores of the four penalty rules for one masked matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PenaltyScore {
    /// Runs of 5 or more same-color modules
    pub runs: u32,
    /// Uniform 2x2 blocks
    pub blocks: u32,
    /// 1:1:3:1:1 finder-like patterns next to a light run
    pub finder_like: u32,
    /// Dark/light imbalance
    pub balance: u32,
}

impl PenaltyScore {
    /// Score a matrix. Every cell counts, fixed or not.
    pub fn evaluate(matrix: &ModuleMatrix) -> Self {
        let dim = matrix.dimension();
        let dark: Vec<bool> = (0..dim)
            .flat_map(|r| matrix.row(r).iter().map(|m| m.is_dark()))
            .collect();

        let mut score = PenaltyScore::default();
        let mut column = vec![false; dim];
        for i in 0..dim {
            let row = &dark[i * dim..(i + 1) * dim];
            for (r, cell) in column.iter_mut().enumerate() {
                *cell = dark[r * dim + i];
            }
            score.runs += run_penalty(row) + run_penalty(&column);
            score.finder_like += finder_penalty(row) + finder_penalty(&column);
        }
        score.blocks = block_penalty(&dark, dim);
        score.balance = balance_penalty(dark.iter().filter(|&&d| d).count(), dim * dim);
        score
    }

    /// Sum of all four rules
    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.finder_like + self.balance
    }
}

/// Rule 1: each run of `5 + k` same-color modules scores `3 + k`
fn run_penalty(line: &[bool]) -> u32 {
    let mut penalty = 0;
    let mut run = 1;
    for i in 1..line.len() {
        if line[i] == line[i - 1] {
            run += 1;
            continue;
        }
        if run >= 5 {
            penalty += N1 + (run - 5);
        }
        run = 1;
    }
    if run >= 5 {
        penalty += N1 + (run - 5);
    }
    penalty
}

/// Rule 2: every 2x2 window of one color, overlapping windows counted separately
fn block_penalty(dark: &[bool], dim: usize) -> u32 {
    let mut penalty = 0;
    for r in 1..dim {
        for c in 1..dim {
            let cell = dark[r * dim + c];
            if dark[(r - 1) * dim + c - 1] == cell
                && dark[(r - 1) * dim + c] == cell
                && dark[r * dim + c - 1] == cell
            {
                penalty += N2;
            }
        }
    }
    penalty
}

/// dark-light-dark-dark-dark-light-dark starting at `i`
fn is_finder_like(line: &[bool], i: usize) -> bool {
    line[i]
        && !line[i + 1]
        && line[i + 2]
        && line[i + 3]
        && line[i + 4]
        && !line[i + 5]
        && line[i + 6]
}

/// Rule 3: scans for light runs of 4 or more and checks for a finder-like
/// pattern ending right before the run or starting right after it. A light
/// run may touch either end of the line.
fn finder_penalty(line: &[bool]) -> u32 {
    let dim = line.len();
    let mut penalty = 0;
    let mut start = 0;
    let mut i = 0;
    while i < dim {
        if !line[i] {
            i += 1;
            continue;
        }
        if i - start >= 4 {
            if start >= 7 && is_finder_like(line, start - 7) {
                penalty += N3;
            }
            if dim - i >= 7 && is_finder_like(line, i) {
                penalty += N3;
                i += 6;
            }
        }
        start = i + 1;
        i += 1;
    }
    if dim - start >= 4 && start >= 7 && is_finder_like(line, start - 7) {
        penalty += N3;
    }
    penalty
}

/// Rule 4: 10 points per full 5% step away from 50% dark.
/// The step count truncates toward zero.
fn balance_penalty(dark: usize, total: usize) -> u32 {
    let ratio = dark as f64 / total as f64;
    let steps = if ratio > 0.55 {
        (20.0 * (ratio - 0.5)) as u32
    } else if ratio < 0.45 {
        (20.0 * (0.5 - ratio)) as u32
    } else {
        0
    };
    steps * N4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(pattern: &str) -> Vec<bool> {
        pattern.bytes().map(|b| b == b'#').collect()
    }

    #[test]
    fn test_run_penalty() {
        assert_eq!(run_penalty(&line("#.#.#.#.")), 0);
        assert_eq!(run_penalty(&line("#####.#.")), 3);
        assert_eq!(run_penalty(&line("#......#")), 4);
        assert_eq!(run_penalty(&line("#####.....")), 6);
        assert_eq!(run_penalty(&line("########")), 6);
    }

    #[test]
    fn test_block_penalty() {
        // 3x3 all light: four overlapping 2x2 windows
        assert_eq!(block_penalty(&[false; 9], 3), 12);
        let checker = [true, false, true, false, true, false, true, false, true];
        assert_eq!(block_penalty(&checker, 3), 0);
    }

    #[test]
    fn test_finder_penalty() {
        // Light run before the pattern
        assert_eq!(finder_penalty(&line("....#.###.#")), 40);
        // Light run after the pattern
        assert_eq!(finder_penalty(&line("#.###.#....")), 40);
        // Both sides
        assert_eq!(finder_penalty(&line("....#.###.#....")), 80);
        // Light run too short
        assert_eq!(finder_penalty(&line("...#.###.#...")), 0);
        // Not a finder ratio
        assert_eq!(finder_penalty(&line("....##.##.#....")), 0);
    }

    #[test]
    fn test_balance_penalty() {
        assert_eq!(balance_penalty(50, 100), 0);
        assert_eq!(balance_penalty(55, 100), 0);
        assert_eq!(balance_penalty(56, 100), 10);
        assert_eq!(balance_penalty(44, 100), 10);
        // 20 * (0.6 - 0.5) is just below 2.0 in floating point
        assert_eq!(balance_penalty(60, 100), 10);
        assert_eq!(balance_penalty(61, 100), 20);
        assert_eq!(balance_penalty(35, 100), 30);
        assert_eq!(balance_penalty(100, 100), 100);
        assert_eq!(balance_penalty(0, 100), 100);
    }
}
