//! This module implements move enumeration, that is, listing the
//! [Candidate]s that may legally be committed to a [Grid] according to
//! [can_place](crate::constraint::can_place).
//!
//! Enumeration order is part of the contract: candidates are sorted by
//! value first, then by row, then by column, each ascending. Consumers
//! such as the [solver](crate::solver) rely on this order being stable.

use crate::{Candidate, Grid, MAX_VALUE, MIN_VALUE, SIZE};
use crate::constraint::can_place;

/// Enumerates every legal move on the given grid, ordered by value first
/// (ascending), then by row, then by column. A grid that admits no legal
/// move, for example a full one, yields an empty vector; that is a normal
/// outcome, not an error.
///
/// ```
/// use sudoku_entropy::{Candidate, Grid};
/// use sudoku_entropy::moves::valid_moves;
///
/// let mut grid = Grid::new();
/// grid.set(0, 0, 1);
///
/// let candidates = valid_moves(&grid);
///
/// // Placing the 1 blocked its own cell (for all 9 values) and 20 more
/// // cells for the value 1. The first cell that still takes a 1 is
/// // (1, 3), and value-major order puts it in front.
/// assert_eq!(700, candidates.len());
/// assert_eq!(Candidate::new(1, 3, 1), candidates[0]);
/// ```
pub fn valid_moves(grid: &Grid) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for value in MIN_VALUE..=MAX_VALUE {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if can_place(grid, row, column, value) {
                    candidates.push(Candidate::new(row, column, value));
                }
            }
        }
    }

    candidates
}

/// Enumerates the legal values for one single cell, as [Candidate]s for
/// that cell ordered by value ascending. A filled or fully blocked cell
/// yields an empty vector; that is a normal outcome, not an error.
///
/// # Arguments
///
/// * `grid`: The grid into which placements are proposed.
/// * `row`: The row (y-coordinate) of the cell in question. Must be in the
/// range `[0, 9[`.
/// * `column`: The column (x-coordinate) of the cell in question. Must be
/// in the range `[0, 9[`.
pub fn valid_values(grid: &Grid, row: usize, column: usize)
        -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for value in MIN_VALUE..=MAX_VALUE {
        if can_place(grid, row, column, value) {
            candidates.push(Candidate::new(row, column, value));
        }
    }

    candidates
}
