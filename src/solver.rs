// Exhaustive backtracking search.
//
// Cells are visited in row-major order and candidate digits are tried in
// ascending order, so for a given grid the first solution found is always
// the same one.
//
// Each candidate placement is checked with three linear scans (row, column,
// block). The grid is fixed at 9x9, so there is no payoff in precomputing
// bitmasks of used digits here.

use crate::consts::{BLANK, N_CELLS};
use crate::positions::{block, cells_of_block, col, row};

/// Tries to complete the grid in place. Returns true if a completion was
/// found, in which case the grid is fully filled. Returns false otherwise,
/// leaving the grid as it was.
pub(crate) fn solve_grid(grid: &mut [u8; N_CELLS]) -> bool {
    solve_from(grid, 0)
}

// Solves the puzzle beginning with `cell`, assuming all cells before it are
// filled consistently. Tentative placements are reverted on failure, so the
// grid is unchanged whenever this returns false.
fn solve_from(grid: &mut [u8; N_CELLS], cell: u8) -> bool {
    // Base case: walked past the last cell, every cell is filled.
    if cell as usize == N_CELLS {
        return true;
    }

    // Givens and earlier placements are skipped, not re-examined.
    if grid[cell as usize] != BLANK {
        return solve_from(grid, cell + 1);
    }

    for digit in 1..=9 {
        if in_row(grid, row(cell), digit)
            || in_col(grid, col(cell), digit)
            || in_block(grid, block(cell), digit)
        {
            continue;
        }

        grid[cell as usize] = digit;
        if solve_from(grid, cell + 1) {
            return true;
        }
        grid[cell as usize] = BLANK;
    }

    // No digit fits, backtrack.
    false
}

fn in_row(grid: &[u8; N_CELLS], row_nr: u8, digit: u8) -> bool {
    (0..9).any(|col_nr| grid[(row_nr * 9 + col_nr) as usize] == digit)
}

fn in_col(grid: &[u8; N_CELLS], col_nr: u8, digit: u8) -> bool {
    (0..9).any(|row_nr| grid[(row_nr * 9 + col_nr) as usize] == digit)
}

fn in_block(grid: &[u8; N_CELLS], block_nr: u8, digit: u8) -> bool {
    cells_of_block(block_nr)
        .iter()
        .any(|&cell| grid[cell as usize] == digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_scans() {
        let mut grid = [BLANK; N_CELLS];
        grid[0] = 5; // row 0, col 0, block 0

        assert!(in_row(&grid, 0, 5));
        assert!(!in_row(&grid, 1, 5));
        assert!(in_col(&grid, 0, 5));
        assert!(!in_col(&grid, 1, 5));
        assert!(in_block(&grid, 0, 5));
        assert!(!in_block(&grid, 1, 5));
        assert!(!in_row(&grid, 0, 6));
    }

    #[test]
    fn grid_untouched_on_failure() {
        // Solvable puzzle made contradictory by duplicating the 5 in the top row.
        let line = "535.7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
        let mut grid = [BLANK; N_CELLS];
        for (cell, ch) in line.bytes().enumerate() {
            if ch != b'.' {
                grid[cell] = ch - b'0';
            }
        }
        let before = grid;

        assert!(!solve_grid(&mut grid));
        assert_eq!(grid[..], before[..]);
    }
}
