//! This module implements the standard Sudoku rules: a value may occur at
//! most once in each row, each column, and each 3x3 block. [can_place]
//! decides whether a single placement respects these rules, [is_solved]
//! decides whether an entire grid does.
//!
//! The rule set is fixed. There is no facility for injecting variant rules
//! into this engine; every check in this crate goes through [can_place].

use crate::{Grid, BLOCK_SIZE, MAX_VALUE, MIN_VALUE, SIZE};

fn row_contains(grid: &Grid, row: usize, value: u8) -> bool {
    for column in 0..SIZE {
        if grid.has_value(row, column, value) {
            return true;
        }
    }

    false
}

fn column_contains(grid: &Grid, column: usize, value: u8) -> bool {
    for row in 0..SIZE {
        if grid.has_value(row, column, value) {
            return true;
        }
    }

    false
}

fn block_contains(grid: &Grid, row: usize, column: usize, value: u8)
        -> bool {
    let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;
    let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;

    for other_row in block_row..(block_row + BLOCK_SIZE) {
        for other_column in block_column..(block_column + BLOCK_SIZE) {
            if grid.has_value(other_row, other_column, value) {
                return true;
            }
        }
    }

    false
}

/// Indicates whether the given value may be written into the cell at the
/// given position without breaking the Sudoku rules. This is the case
/// exactly if the cell is blank and the value occurs neither in its row,
/// nor its column, nor its 3x3 block. The grid is never modified.
///
/// At most 27 cells are inspected: 9 for the row, 9 for the column and 9
/// for the block, where each scan stops at the first hit.
///
/// # Arguments
///
/// * `grid`: The grid into which the placement is proposed.
/// * `row`: The row (y-coordinate) of the cell to check. Must be in the
/// range `[0, 9[`.
/// * `column`: The column (x-coordinate) of the cell to check. Must be in
/// the range `[0, 9[`.
/// * `value`: The value whose placement is checked. Must be in the range
/// `[1, 9]`; violations are caught by a debug assertion.
pub fn can_place(grid: &Grid, row: usize, column: usize, value: u8) -> bool {
    debug_assert!(value >= MIN_VALUE && value <= MAX_VALUE);

    if grid.get(row, column).is_some() {
        return false;
    }

    !row_contains(grid, row, value) &&
        !column_contains(grid, column, value) &&
        !block_contains(grid, row, column, value)
}

/// Indicates whether the given grid is completely solved, that is, every
/// cell is filled and no value clashes with its row, column, or block.
///
/// Each filled cell is verified by blanking it in a scratch copy of the
/// grid and asking [can_place] whether its value could be written back
/// into the now-blank cell.
pub fn is_solved(grid: &Grid) -> bool {
    for row in 0..SIZE {
        for column in 0..SIZE {
            let value = match grid.get(row, column) {
                Some(value) => value,
                None => return false
            };

            let mut scratch = *grid;
            scratch.clear(row, column);

            if !can_place(&scratch, row, column, value) {
                return false;
            }
        }
    }

    true
}
